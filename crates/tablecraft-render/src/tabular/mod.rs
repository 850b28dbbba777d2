//! Table model and border rendering.
//!
//! [`Table`] holds the data: headers, rows, divider flags, alignments and the
//! cached display width of each column. Rendering is a pure function of a table
//! and a [`Style`](crate::style::Style):
//!
//! ```rust
//! use tablecraft_render::{style, Table};
//!
//! let mut table = Table::new(["Name", "Age"]);
//! table.add_row(["Alice", "30"]);
//! table.add_row(["Bob", "25"]);
//! table.sort_table("Age", "asc").unwrap();
//!
//! let text = table.render_with(&style::get("unicode-single-line").unwrap());
//! assert!(text.starts_with("┌───────┬─────┐"));
//! assert!(text.contains("│ Bob   │ 25  │"));
//! ```
//!
//! Widths are computed with [`display_width`](crate::display_width), so wide
//! characters occupy the right number of terminal columns. Cell values are
//! never truncated.

mod decorator;
mod model;
mod types;

pub use decorator::{render, EMPTY_TABLE};
pub use model::Table;
pub use types::{Align, SortOrder};
