//! Request classifier module.
//!
//! This module turns the first line of a connection into either a supported
//! request (verb plus resolved resource path) or a rejection, without doing
//! any I/O of its own.

mod error;
mod method;
mod request;
mod tests;

// Re-export public items
pub use error::Error;
pub use method::Method;
pub use request::HttpRequest;

// Re-export the classify_request_line function
pub use request::classify_request_line;
