//! Error types for the request classifier.

use thiserror::Error;

/// Rejections produced while classifying a request line.
///
/// Each variant corresponds to exactly one response status; the mapping to
/// `StatusCode` lives on the server side so the classifier stays free of
/// response concerns.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line does not have exactly three whitespace-separated
    /// tokens (method, target, version).
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The method token is not an HTTP verb this server knows about.
    #[error("Unrecognized method: {0}")]
    UnrecognizedMethod(String),

    /// The method token is a known HTTP verb this server does not serve.
    #[error("Method not implemented: {0}")]
    NotImplemented(String),

    /// The requested path begins with a parent-directory segment.
    #[error("Refusing path above the served root: {0}")]
    TraversalForbidden(String),
}
