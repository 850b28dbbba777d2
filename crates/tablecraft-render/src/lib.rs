//! # Tablecraft Render - Text Tables for the Terminal
//!
//! `tablecraft-render` holds a table of string cells, renders it with
//! configurable border glyphs, and moves it in and out of common interchange
//! formats.
//!
//! This crate is the foundation of the `tablecraft` tool, but can be used on
//! its own by anything that needs to print aligned tables.
//!
//! ## Core Concepts
//!
//! - [`Table`]: headers, rows, per-row dividers, per-column alignment and the
//!   cached display width of every column
//! - [`Style`]: the glyphs used for borders, separators and cell dividers
//! - [`style`]: the process-wide catalog of named styles
//! - [`formats`]: CSV, JSON, XML and Markdown import/export, HTML export
//!
//! ## Quick Start
//!
//! ```rust
//! use tablecraft_render::Table;
//!
//! let mut table = Table::new(["Name", "Age"]);
//! table.add_row(["Alice", "30"]);
//! table.add_row(["Bob", "25"]);
//! table.set_alignment("Age", "r");
//!
//! assert_eq!(
//!     table.render(),
//!     "+-------+-----+\n\
//!      | Name  | Age |\n\
//!      +-------+-----+\n\
//!      | Alice |  30 |\n\
//!      | Bob   |  25 |\n\
//!      +-------+-----+\n"
//! );
//! ```
//!
//! ## Styles
//!
//! ```rust
//! use tablecraft_render::Table;
//!
//! let mut table = Table::new(["Name"]);
//! table.add_row(["Alice"]);
//! table.set_style("github-markdown").unwrap();
//!
//! assert_eq!(table.render(), "| Name  |\n|-------|\n| Alice |\n");
//! ```
//!
//! ## Formats
//!
//! ```rust
//! use tablecraft_render::{formats, Table};
//!
//! let table = formats::import("| A | B |\n|---|--:|\n| 1 | 2 |", "md").unwrap();
//! assert_eq!(formats::export(&table, "csv").unwrap(), "A,B\n1,2\n");
//! ```

mod error;
pub mod formats;
pub mod style;
pub mod tabular;
mod util;

pub use error::TableError;

pub use formats::{Format, FormatExporter, TableExporter};
pub use style::{BorderLine, Style};
pub use tabular::{Align, SortOrder, Table};

pub use util::{display_width, pad_center, pad_left, pad_right};
