//! Import and export adapters.
//!
//! Each interchange format is a unit type implementing [`Exporter`] and, where
//! the format can be read back, [`Importer`]. [`Format`] names the closed set
//! of formats and dispatches to the right adapter:
//!
//! | Format | Export | Import |
//! |--------|--------|--------|
//! | `csv` | header record then rows | yes |
//! | `json` | `{"headers": [...], "rows": [[...]]}` | yes |
//! | `xml` | `<table><headers>..</headers><rows>..</rows></table>` | yes |
//! | `markdown` (`md`) | GFM pipe table with alignment row | yes |
//! | `html` | `<table>` with `<th>` / `<td>` | no |
//!
//! ```rust
//! use tablecraft_render::{formats, Table};
//!
//! let mut table = Table::new(["Name", "Age"]);
//! table.add_row(["Alice", "30"]);
//!
//! let csv = formats::export(&table, "csv").unwrap();
//! assert_eq!(csv, "Name,Age\nAlice,30\n");
//!
//! let back = formats::import(&csv, "CSV").unwrap();
//! assert_eq!(back.to_rows(), table.to_rows());
//! ```

mod csv;
mod html;
mod json;
mod markdown;
mod xml;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{Table, TableError};

pub use self::csv::CsvFormat;
pub use self::html::HtmlFormat;
pub use self::json::JsonFormat;
pub use self::markdown::MarkdownFormat;
pub use self::xml::XmlFormat;

/// Serializes a table into one interchange format.
pub trait Exporter {
    /// # Errors
    ///
    /// Returns [`TableError::SerializationFailure`] when encoding fails.
    fn export(&self, table: &Table) -> Result<String, TableError>;
}

/// Parses one interchange format into a new table.
pub trait Importer {
    /// # Errors
    ///
    /// Returns [`TableError::SerializationFailure`] for malformed input.
    fn import(&self, data: &str) -> Result<Table, TableError>;
}

/// The supported interchange formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Csv,
    Json,
    Xml,
    Markdown,
    Html,
}

impl Format {
    /// Every format, in the order offered to users.
    pub const ALL: [Format; 5] = [
        Format::Csv,
        Format::Json,
        Format::Xml,
        Format::Markdown,
        Format::Html,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Markdown => "markdown",
            Format::Html => "html",
        }
    }

    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "htm" => Some(Format::Html),
            other => other.parse().ok(),
        }
    }

    pub fn exporter(self) -> &'static dyn Exporter {
        match self {
            Format::Csv => &CsvFormat,
            Format::Json => &JsonFormat,
            Format::Xml => &XmlFormat,
            Format::Markdown => &MarkdownFormat,
            Format::Html => &HtmlFormat,
        }
    }

    /// The importer for this format.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnsupportedFormat`] for export-only formats.
    pub fn importer(self) -> Result<&'static dyn Importer, TableError> {
        match self {
            Format::Csv => Ok(&CsvFormat),
            Format::Json => Ok(&JsonFormat),
            Format::Xml => Ok(&XmlFormat),
            Format::Markdown => Ok(&MarkdownFormat),
            Format::Html => Err(TableError::UnsupportedFormat(self.name().to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = TableError;

    /// Parses a format name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            "markdown" | "md" => Ok(Format::Markdown),
            "html" => Ok(Format::Html),
            _ => Err(TableError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exports `table` in the format called `format`.
///
/// # Errors
///
/// Returns [`TableError::UnsupportedFormat`] for unknown names, or the
/// adapter's [`TableError::SerializationFailure`].
pub fn export(table: &Table, format: &str) -> Result<String, TableError> {
    format.parse::<Format>()?.exporter().export(table)
}

/// Imports `data` written in the format called `format`.
///
/// # Errors
///
/// Returns [`TableError::UnsupportedFormat`] for unknown or export-only names,
/// or the adapter's [`TableError::SerializationFailure`].
pub fn import(data: &str, format: &str) -> Result<Table, TableError> {
    format.parse::<Format>()?.importer()?.import(data)
}

/// Export seam used by the interactive session.
///
/// The default [`FormatExporter`] dispatches to the built-in adapters; tests
/// and embedders can substitute their own.
pub trait TableExporter {
    /// # Errors
    ///
    /// Returns whatever the underlying adapter reports.
    fn export(&self, table: &Table, format: Format) -> Result<String, TableError>;
}

/// Dispatches to the built-in adapter for each [`Format`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FormatExporter;

impl TableExporter for FormatExporter {
    fn export(&self, table: &Table, format: Format) -> Result<String, TableError> {
        tracing::debug!(%format, rows = table.row_count(), "exporting table");
        format.exporter().export(table)
    }
}
