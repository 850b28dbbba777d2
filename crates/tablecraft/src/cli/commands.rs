use std::fs;
use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tablecraft_input::{Session, SessionConfig, StreamTerminal};
use tablecraft_render::{style, Format, SortOrder, Table};

use super::{BrowseArgs, Cli, Commands, ConvertArgs, RenderArgs};

/// Installs the stderr log subscriber: warnings only, or debug events with
/// `--verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Executes one parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => {
            print_block(&render_table(&args)?);
            Ok(())
        }
        Commands::Browse(args) => browse(args),
        Commands::Convert(args) => {
            let text = convert_table(&args)?;
            match &args.output {
                Some(path) => fs::write(path, text)
                    .with_context(|| format!("failed to write '{}'", path.display())),
                None => {
                    print_block(&text);
                    Ok(())
                }
            }
        }
        Commands::Styles(args) => {
            print!("{}", style_gallery(args.preview));
            Ok(())
        }
    }
}

/// Reads a table from `path` (`-` is stdin).
///
/// The format comes from `format`, or from the file extension when `None`.
pub fn load_table(path: &Path, format: Option<Format>) -> Result<Table> {
    let Some(format) = format.or_else(|| Format::from_path(path)) else {
        bail!(
            "cannot tell the format of '{}'; pass --format",
            path.display()
        );
    };

    let data = if path == Path::new("-") {
        io::read_to_string(io::stdin()).context("failed to read stdin")?
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?
    };

    tracing::debug!(%format, path = %path.display(), bytes = data.len(), "loading table");
    let table = format
        .importer()
        .and_then(|importer| importer.import(&data))
        .with_context(|| format!("failed to load '{}' as {}", path.display(), format))?;
    Ok(table)
}

/// Produces the text printed by `render`.
pub fn render_table(args: &RenderArgs) -> Result<String> {
    let mut table = load_table(&args.input.file, args.input.format)?;
    table.set_style(&args.style)?;

    for (column, code) in &args.align {
        table.set_alignment(column, code);
    }

    if let Some(column) = &args.sort {
        let order = if args.desc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        table.sort_by(column, order)?;
    }

    Ok(match args.page {
        Some(page) => table.page(page, args.rows_per_page).render(),
        None => table.render(),
    })
}

/// Produces the converted document for `convert`.
pub fn convert_table(args: &ConvertArgs) -> Result<String> {
    let table = load_table(&args.input.file, args.input.format)?;
    let text = args
        .to
        .exporter()
        .export(&table)
        .with_context(|| format!("failed to export as {}", args.to))?;
    Ok(text)
}

/// Lists every registered style, optionally with a sample table drawn in it.
pub fn style_gallery(preview: bool) -> String {
    let mut sample = Table::new(["Name", "Age"]);
    sample.add_rows([["Alice", "30"], ["Bob", "25"]]);

    let mut out = String::new();
    for name in style::names() {
        out.push_str(&console::style(&name).bold().to_string());
        out.push('\n');
        if preview {
            if let Ok(found) = style::get(&name) {
                out.push_str(&sample.render_with(&found));
                out.push('\n');
            }
        }
    }
    out
}

fn browse(args: BrowseArgs) -> Result<()> {
    if args.input.file == Path::new("-") {
        bail!("browse reads commands from stdin, so the table must come from a file");
    }
    let table = load_table(&args.input.file, args.input.format)?;
    let config = SessionConfig::new()
        .rows_per_page(args.rows_per_page)
        .style(args.style);

    let mut session = Session::with_config(table, StreamTerminal::stdio(), config)?;
    session.run()?;
    println!();
    Ok(())
}

fn print_block(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
