//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur while serving a connection.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line was rejected before any file access.
    #[error("rejected request: {0}")]
    Rejected(#[from] ParserError),

    /// The requested file could not be opened.
    #[error("not found: {0}")]
    NotFound(String),

    /// I/O error on the socket or the opened file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
