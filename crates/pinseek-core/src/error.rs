//! Error types for pinseek-core.
//!
//! Only [`DataError`] is fatal, and only at startup. Everything else is
//! recoverable: the transport layer absorbs it at the boundary nearest its
//! origin and turns it into a user-visible message.

use std::path::PathBuf;
use thiserror::Error;

/// Dataset loading failures. Fatal: the process must not start serving with
/// a partially-usable dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be opened or a row could not be read at all.
    #[error("failed to read dataset file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("dataset file {path} is missing required column \"{column}\"")]
    MissingColumn { path: PathBuf, column: &'static str },
}

/// Query classification failures, surfaced before any matching happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The query was empty (or whitespace only). The user is prompted to
    /// re-enter; nothing is logged.
    #[error("query is empty")]
    Empty,
}

/// Document export failures. Recoverable: logged, reported generically to
/// the user; artifact cleanup is handled by `Drop` regardless.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The PDF renderer rejected the document.
    #[error("failed to render results document")]
    Pdf(#[from] printpdf::Error),

    /// The artifact file or its scratch directory could not be written.
    #[error("failed to write export artifact")]
    Io(#[from] std::io::Error),
}
