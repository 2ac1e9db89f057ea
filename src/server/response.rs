//! HTTP response head types and utilities.

use crate::parser::Error as ParserError;
use crate::server::content::ContentKind;

/// Protocol version emitted on every status line.
const HTTP_VERSION: &str = "HTTP/1.0";

/// Value of the `Server` header emitted on every response.
pub const SERVER_NAME: &str = "wheelhttp-rs";

/// HTTP status codes with their standard reason phrases.
///
/// This is the complete set the server can emit; every code path resolves to
/// exactly one of these six before any byte is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    Forbidden = 403,
    NotFound = 404,
    InternalServerError = 500,
    NotImplemented = 501,
}

impl StatusCode {
    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

impl From<&ParserError> for StatusCode {
    fn from(err: &ParserError) -> Self {
        match err {
            ParserError::MalformedRequestLine(_) | ParserError::UnrecognizedMethod(_) => {
                StatusCode::BadRequest
            }
            ParserError::NotImplemented(_) => StatusCode::NotImplemented,
            ParserError::TraversalForbidden(_) => StatusCode::Forbidden,
        }
    }
}

/// The header block of an HTTP response.
///
/// The block has a fixed line order: status line, `Connection: close`,
/// `Server`, then `Content-Type` when a content kind is present (only 200
/// responses carry one), then the blank line separating headers from body.
/// It is built once per response and never mutated afterwards; the body, if
/// any, is streamed separately by the caller.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    /// The HTTP status code
    pub status: StatusCode,
    /// The content classification driving the `Content-Type` header
    pub content: Option<ContentKind>,
}

impl ResponseHead {
    /// Create a response head with the given status and no `Content-Type`.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content: None,
        }
    }

    /// Attach a content classification, emitted as the `Content-Type` header.
    pub fn with_content(mut self, content: ContentKind) -> Self {
        self.content = Some(content);
        self
    }

    /// Convert the head to bytes, ready to be written to the sink.
    ///
    /// Every line is CRLF-terminated and the block ends with an extra CRLF.
    ///
    /// # Examples
    ///
    /// ```
    /// use wheelhttp_rs::{ResponseHead, StatusCode};
    ///
    /// let head = ResponseHead::new(StatusCode::NotImplemented);
    /// assert_eq!(
    ///     head.to_bytes(),
    ///     b"HTTP/1.0 501 Not Implemented\r\nConnection: close\r\nServer: wheelhttp-rs\r\n\r\n".to_vec()
    /// );
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Add the status line
        let status_line = format!(
            "{HTTP_VERSION} {} {}\r\n",
            self.status as u16,
            self.status.reason_phrase()
        );
        bytes.extend_from_slice(status_line.as_bytes());

        // Add the headers, in fixed order
        bytes.extend_from_slice(b"Connection: close\r\n");
        bytes.extend_from_slice(format!("Server: {SERVER_NAME}\r\n").as_bytes());
        if let Some(content) = self.content {
            bytes.extend_from_slice(format!("Content-Type: {}\r\n", content.mime()).as_bytes());
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        bytes
    }
}
