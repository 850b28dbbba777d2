//! The interactive browse-and-edit loop.
//!
//! Each iteration renders the current page, prints the page counter and the
//! command menu, then reads one command. Multi-step commands (edit, add,
//! delete, sort, export) ask their own follow-up questions; end of input at
//! any follow-up cancels that command, while end of input at the menu ends
//! the session.
//!
//! ```text
//! Browsing ──e/a/d/s──▶ follow-up prompts ──▶ Browsing
//!    │  ╲
//!    │   ╲──x──▶ ChooseFormat ─▶ ChooseDestination ─▶ [ConfirmOverwrite] ─▶ Write
//!    │
//!    └──q / EOF──▶ done
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tablecraft_render::{style, Format, FormatExporter, SortOrder, Style, Table, TableExporter};

use crate::command::Command;
use crate::terminal::Terminal;
use crate::SessionError;

const MENU: &str = "Enter 'n' for next page, 'p' for previous page, a page number, 'e' to edit a row, 'a' to add a row, 'd' to delete a row, 's' to sort, 'x' to export, or 'q' to quit: ";
const FORMAT_PROMPT: &str = "Enter export format (csv, json, xml, markdown, html): ";
const FILENAME_PROMPT: &str = "Enter the filename to export to: ";
const EXPORT_CANCELLED: &str = "Export cancelled.";
const NO_CHANGES: &str = "No changes made to row.";

/// Default number of rows shown per page.
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Settings for a [`Session`].
#[derive(Clone, Debug)]
pub struct SessionConfig {
    rows_per_page: usize,
    style: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            style: "default".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows shown per page. Zero is treated as one.
    pub fn rows_per_page(mut self, rows: usize) -> Self {
        self.rows_per_page = rows.max(1);
        self
    }

    /// Name of the catalog style pages are rendered with.
    pub fn style(mut self, name: impl Into<String>) -> Self {
        self.style = name.into();
        self
    }
}

/// Where an export currently stands.
enum ExportStep {
    ChooseFormat,
    ChooseDestination(Format),
    ConfirmOverwrite(Format, PathBuf),
    Write(Format, PathBuf),
}

/// One interactive run over a table.
///
/// # Example
///
/// ```rust
/// use tablecraft_input::{MockTerminal, Session};
/// use tablecraft_render::Table;
///
/// let mut table = Table::new(["Name", "Age"]);
/// table.add_row(["Alice", "30"]);
/// table.add_row(["Bob", "25"]);
///
/// let terminal = MockTerminal::with_responses(["s", "Age", "asc", "q"]);
/// let mut session = Session::new(table, terminal);
/// session.run().unwrap();
///
/// assert_eq!(session.table().get_row(0).unwrap()[0], "Bob");
/// assert!(session
///     .terminal()
///     .output()
///     .contains("Table sorted by 'Age' in ascending order."));
/// ```
pub struct Session<T: Terminal> {
    table: Table,
    terminal: T,
    exporter: Box<dyn TableExporter>,
    style: Style,
    rows_per_page: usize,
    current_page: usize,
}

impl<T: Terminal> Session<T> {
    /// Create a session with the default style and page size.
    pub fn new(table: Table, terminal: T) -> Self {
        Self {
            table,
            terminal,
            exporter: Box::new(FormatExporter),
            style: Style::default(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            current_page: 1,
        }
    }

    /// Create a session from explicit settings.
    ///
    /// # Errors
    ///
    /// Fails when the configured style is not in the catalog.
    pub fn with_config(table: Table, terminal: T, config: SessionConfig) -> Result<Self, SessionError> {
        let style = style::get(&config.style)?;
        Ok(Self {
            style,
            rows_per_page: config.rows_per_page.max(1),
            ..Self::new(table, terminal)
        })
    }

    /// Replace the exporter used by the `x` command.
    pub fn exporter(mut self, exporter: impl TableExporter + 'static) -> Self {
        self.exporter = Box::new(exporter);
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// The 1-based page currently shown.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.table.total_pages(self.rows_per_page)
    }

    /// Hand back the (possibly edited) table and the terminal.
    pub fn into_parts(self) -> (Table, T) {
        (self.table, self.terminal)
    }

    /// Run until `q` or end of input.
    ///
    /// # Errors
    ///
    /// Only terminal failures end the loop with an error; invalid answers are
    /// reported on the terminal and the loop continues.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.show_page()?;

            let Some(line) = self.terminal.read_line()? else {
                tracing::debug!("end of input, leaving session");
                break;
            };
            let command = Command::parse(&line);
            tracing::debug!(?command, page = self.current_page, "dispatching command");

            let total = self.total_pages();
            match command {
                Command::Quit => break,
                Command::Next => {
                    if self.current_page < total {
                        self.current_page += 1;
                    }
                }
                Command::Previous => {
                    if self.current_page > 1 {
                        self.current_page -= 1;
                    }
                }
                Command::Page(page) => {
                    if page <= total {
                        self.current_page = page;
                    }
                }
                Command::Edit => self.edit_row()?,
                Command::Add => self.add_row()?,
                Command::Delete => self.delete_row()?,
                Command::Sort => self.sort()?,
                Command::Export => self.export()?,
                Command::Unknown(_) => {}
            }
        }
        Ok(())
    }

    fn show_page(&mut self) -> Result<(), SessionError> {
        let mut text = self
            .table
            .page(self.current_page, self.rows_per_page)
            .render_with(&self.style);
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&format!(
            "Page {} of {}\n",
            self.current_page,
            self.total_pages()
        ));
        text.push_str(MENU);
        self.terminal.write(&text)?;
        Ok(())
    }

    /// Prints `text` and reads the trimmed answer; `None` at end of input.
    fn ask(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        self.terminal.write(text)?;
        Ok(self
            .terminal
            .read_line()?
            .map(|line| line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> Result<(), SessionError> {
        self.terminal.write(message)?;
        self.terminal.write("\n")?;
        Ok(())
    }

    /// Asks for a 1-based row number and returns the 0-based index.
    fn ask_row(&mut self, action: &str) -> Result<Option<usize>, SessionError> {
        let count = self.table.row_count();
        let Some(answer) = self.ask(&format!(
            "Enter the row number to {} (1 to {}): ",
            action, count
        ))?
        else {
            return Ok(None);
        };

        match answer.parse::<usize>() {
            Ok(number) if (1..=count).contains(&number) => Ok(Some(number - 1)),
            _ => {
                self.say("Invalid row number.")?;
                Ok(None)
            }
        }
    }

    fn edit_row(&mut self) -> Result<(), SessionError> {
        let Some(index) = self.ask_row("edit")? else {
            return Ok(());
        };

        let current = self.table.get_row(index)?.to_vec();
        let headers = self.table.headers().to_vec();
        let mut updated = current.clone();
        let mut changed = false;

        for (i, header) in headers.iter().enumerate() {
            let prompt = format!(
                "Enter new value for '{}' (leave blank to keep '{}'): ",
                header, current[i]
            );
            let Some(value) = self.ask(&prompt)? else {
                return self.say(NO_CHANGES);
            };
            if !value.is_empty() && value != current[i] {
                updated[i] = value;
                changed = true;
            }
        }

        if changed {
            self.table.update_row(index, updated)?;
            self.say("Row updated successfully.")
        } else {
            self.say(NO_CHANGES)
        }
    }

    fn add_row(&mut self) -> Result<(), SessionError> {
        let headers = self.table.headers().to_vec();
        let mut values = Vec::with_capacity(headers.len());
        for header in &headers {
            let Some(value) = self.ask(&format!("Enter value for '{}': ", header))? else {
                return Ok(());
            };
            values.push(value);
        }
        self.table.add_row(values);
        self.say("Row added successfully.")
    }

    fn delete_row(&mut self) -> Result<(), SessionError> {
        let Some(index) = self.ask_row("delete")? else {
            return Ok(());
        };
        self.table.delete_row(index)?;

        let last = self.total_pages().max(1);
        self.current_page = self.current_page.clamp(1, last);
        self.say("Row deleted successfully.")
    }

    fn sort(&mut self) -> Result<(), SessionError> {
        let Some(column) = self.ask("Enter the column name to sort by: ")? else {
            return Ok(());
        };
        if self.table.column_index(&column).is_none() {
            return self.say("Invalid column name.");
        }
        let Some(order) = self.ask("Enter sort order (asc/desc, default asc): ")? else {
            return Ok(());
        };

        let order = SortOrder::parse(&order);
        self.table.sort_by(&column, order)?;
        self.say(&format!(
            "Table sorted by '{}' in {} order.",
            column,
            order.describe()
        ))
    }

    fn export(&mut self) -> Result<(), SessionError> {
        let mut step = ExportStep::ChooseFormat;
        loop {
            step = match step {
                ExportStep::ChooseFormat => match self.ask(FORMAT_PROMPT)? {
                    None => return self.say(EXPORT_CANCELLED),
                    Some(answer) if answer.is_empty() => return self.say(EXPORT_CANCELLED),
                    Some(answer) => match answer.parse::<Format>() {
                        Ok(format) => ExportStep::ChooseDestination(format),
                        Err(_) => {
                            self.say("Invalid format.")?;
                            ExportStep::ChooseFormat
                        }
                    },
                },
                ExportStep::ChooseDestination(format) => match self.ask(FILENAME_PROMPT)? {
                    None => return self.say(EXPORT_CANCELLED),
                    Some(answer) if answer.is_empty() => {
                        self.say("Filename cannot be empty.")?;
                        ExportStep::ChooseDestination(format)
                    }
                    Some(answer) => {
                        let path = PathBuf::from(answer);
                        if path.exists() {
                            ExportStep::ConfirmOverwrite(format, path)
                        } else {
                            ExportStep::Write(format, path)
                        }
                    }
                },
                ExportStep::ConfirmOverwrite(format, path) => {
                    let prompt = format!(
                        "File '{}' already exists. Overwrite? (y/n): ",
                        path.display()
                    );
                    match self.ask(&prompt)?.as_deref().map(str::to_ascii_lowercase) {
                        Some(answer) if answer == "y" || answer == "yes" => {
                            ExportStep::Write(format, path)
                        }
                        _ => return self.say(EXPORT_CANCELLED),
                    }
                }
                ExportStep::Write(format, path) => return self.write_export(format, &path),
            };
        }
    }

    fn write_export(&mut self, format: Format, path: &Path) -> Result<(), SessionError> {
        let written = self
            .exporter
            .export(&self.table, format)
            .map_err(|err| err.to_string())
            .and_then(|data| fs::write(path, data).map_err(|err| err.to_string()));

        match written {
            Ok(()) => {
                tracing::debug!(%format, path = %path.display(), "table exported");
                self.say(&format!(
                    "Table exported successfully to '{}'.",
                    path.display()
                ))
            }
            Err(message) => {
                tracing::warn!(%format, path = %path.display(), error = %message, "export failed");
                self.say(&format!("Error exporting table: {}", message))
            }
        }
    }
}
