//! Command-line interface of the `tablecraft` binary.
//!
//! ```text
//! tablecraft render  people.csv --style unicode-rounded --align Age=r --sort Age
//! tablecraft browse  people.json --rows-per-page 10
//! tablecraft convert people.csv --to markdown --output people.md
//! tablecraft styles  --preview
//! ```
//!
//! The input format is taken from `--format` or, failing that, from the file
//! extension. Reading from stdin (`-`) needs an explicit `--format`.

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tablecraft_input::DEFAULT_ROWS_PER_PAGE;
use tablecraft_render::Format;

pub use commands::{convert_table, init_logging, load_table, render_table, run, style_gallery};

#[derive(Debug, Parser)]
#[command(name = "tablecraft", version, about = "Render, browse and convert text tables")]
pub struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a table file with a border style
    Render(RenderArgs),
    /// Page through and edit a table interactively
    Browse(BrowseArgs),
    /// Convert a table file to another format
    Convert(ConvertArgs),
    /// List the registered border styles
    Styles(StylesArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Table file to read, or `-` for stdin
    pub file: PathBuf,

    /// Input format (csv, json, xml, markdown); guessed from the extension when omitted
    #[arg(short, long)]
    pub format: Option<Format>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Border style name
    #[arg(short, long, default_value = "default")]
    pub style: String,

    /// Column alignment, repeatable
    #[arg(short, long = "align", value_name = "COLUMN=l|r|c", value_parser = parse_alignment)]
    pub align: Vec<(String, String)>,

    /// Sort rows by this column
    #[arg(long, value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Print only this page (1-based)
    #[arg(long)]
    pub page: Option<usize>,

    /// Rows per page when --page is given
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_PAGE)]
    pub rows_per_page: usize,
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Border style name
    #[arg(short, long, default_value = "default")]
    pub style: String,

    /// Rows shown per page
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_PAGE)]
    pub rows_per_page: usize,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (csv, json, xml, markdown, html)
    #[arg(short, long)]
    pub to: Format,

    /// Write here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct StylesArgs {
    /// Render a sample table in every style
    #[arg(long)]
    pub preview: bool,
}

/// Parses `COLUMN=CODE` where CODE is `l`, `r` or `c`.
pub fn parse_alignment(s: &str) -> Result<(String, String), String> {
    let (column, code) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected COLUMN=l|r|c, got '{}'", s))?;
    if column.is_empty() {
        return Err("column name is empty".to_string());
    }
    match code.to_ascii_lowercase().as_str() {
        "l" | "r" | "c" => Ok((column.to_string(), code.to_string())),
        _ => Err(format!("alignment must be l, r or c, got '{}'", code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_render_arguments() {
        let cli = Cli::try_parse_from([
            "tablecraft",
            "render",
            "people.csv",
            "--style",
            "compact",
            "-a",
            "Age=r",
            "--sort",
            "Age",
            "--desc",
        ])
        .unwrap();

        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.input.file, PathBuf::from("people.csv"));
        assert_eq!(args.style, "compact");
        assert_eq!(args.align, vec![("Age".to_string(), "r".to_string())]);
        assert_eq!(args.sort.as_deref(), Some("Age"));
        assert!(args.desc);
        assert_eq!(args.rows_per_page, 5);
    }

    #[test]
    fn parse_convert_format_names() {
        let cli = Cli::try_parse_from(["tablecraft", "-v", "convert", "t.csv", "--to", "MD"]).unwrap();
        assert!(cli.verbose);
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.to, Format::Markdown);
        assert!(args.output.is_none());
    }

    #[test]
    fn reject_unknown_format() {
        assert!(Cli::try_parse_from(["tablecraft", "convert", "t.csv", "--to", "yaml"]).is_err());
    }

    #[test]
    fn desc_requires_sort() {
        assert!(Cli::try_parse_from(["tablecraft", "render", "t.csv", "--desc"]).is_err());
    }

    #[test]
    fn alignment_values() {
        assert_eq!(
            parse_alignment("First Name=C").unwrap(),
            ("First Name".to_string(), "C".to_string())
        );
        assert!(parse_alignment("Age").is_err());
        assert!(parse_alignment("=r").is_err());
        assert!(parse_alignment("Age=x").is_err());
    }
}
