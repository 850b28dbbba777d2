//! Error types for the interactive session.

use std::io;

use tablecraft_render::TableError;

/// Errors that end an interactive session.
///
/// Mistakes made at a prompt (a bad row number, an unknown column or format)
/// are reported on the terminal and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A table operation failed, or the configured style is unknown.
    #[error(transparent)]
    Table(#[from] TableError),
}
