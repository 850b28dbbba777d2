//! # Tablecraft - Text Tables for the Terminal
//!
//! `tablecraft` ties together the table model and renderer from
//! [`tablecraft_render`] and the interactive session from
//! [`tablecraft_input`], and ships the `tablecraft` command-line tool.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablecraft::{formats, Table};
//!
//! let mut table = Table::new(["Name", "Age"]);
//! table.add_row(["Alice", "30"]);
//! table.add_row(["Bob", "25"]);
//! table.sort_table("Age", "asc").unwrap();
//! table.set_style("unicode-rounded").unwrap();
//!
//! println!("{}", table);
//! println!("{}", formats::export(&table, "markdown").unwrap());
//! ```
//!
//! ## Interactive Sessions
//!
//! ```rust
//! use tablecraft::{MockTerminal, Session, SessionConfig, Table};
//!
//! let mut table = Table::new(["Name"]);
//! table.add_rows([["Alice"], ["Bob"], ["Charlie"]]);
//!
//! let config = SessionConfig::new().rows_per_page(2);
//! let terminal = MockTerminal::with_responses(["n", "q"]);
//! let mut session = Session::with_config(table, terminal, config).unwrap();
//! session.run().unwrap();
//!
//! assert!(session.terminal().output().contains("Page 2 of 2"));
//! ```

pub mod cli;

pub use tablecraft_render::{
    display_width, formats, pad_center, pad_left, pad_right, style, tabular, Align, BorderLine,
    Format, FormatExporter, SortOrder, Style, Table, TableError, TableExporter,
};

pub use tablecraft_input::{
    Command, MockTerminal, Session, SessionConfig, SessionError, StreamTerminal, Terminal,
    DEFAULT_ROWS_PER_PAGE,
};
