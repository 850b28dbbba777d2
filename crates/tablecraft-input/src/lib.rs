//! Interactive browsing and editing of text tables.
//!
//! `tablecraft-input` runs a line-oriented session over a
//! [`Table`](tablecraft_render::Table): it shows one page at a time and
//! accepts single-letter commands to page, edit, add, delete, sort and export
//! rows. Input and output go through the [`Terminal`] trait, so the same
//! session runs on stdin/stdout, on any pair of byte streams, or against a
//! scripted [`MockTerminal`] in tests.
//!
//! # Quick Start
//!
//! ```no_run
//! use tablecraft_input::{Session, SessionConfig, StreamTerminal};
//! use tablecraft_render::Table;
//!
//! let mut table = Table::new(["Name", "Age"]);
//! table.add_row(["Alice", "30"]);
//!
//! let config = SessionConfig::new().rows_per_page(10).style("unicode-rounded");
//! let mut session = Session::with_config(table, StreamTerminal::stdio(), config)?;
//! session.run()?;
//! # Ok::<(), tablecraft_input::SessionError>(())
//! ```
//!
//! # Commands
//!
//! | Input | Effect |
//! |-------|--------|
//! | `n` / `p` | next / previous page |
//! | `3` | jump to page 3 |
//! | `e` | edit a row, one prompt per column |
//! | `a` | add a row |
//! | `d` | delete a row |
//! | `s` | sort by a column, ascending or descending |
//! | `x` | export to csv, json, xml, markdown or html |
//! | `q` | quit |
//!
//! # Testing
//!
//! ```
//! use tablecraft_input::{MockTerminal, Session};
//! use tablecraft_render::Table;
//!
//! let mut session = Session::new(Table::new(["A"]), MockTerminal::with_responses(["q"]));
//! session.run().unwrap();
//! assert!(session.terminal().output().contains("Page 1 of 0"));
//! ```

mod command;
mod error;
mod session;
mod terminal;

pub use command::Command;
pub use error::SessionError;
pub use session::{Session, SessionConfig, DEFAULT_ROWS_PER_PAGE};
pub use terminal::{MockTerminal, StreamTerminal, Terminal};
