//! HTTP request methods.

use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;

/// HTTP verbs that are recognized but deliberately not served. A request
/// using one of these is answered with 501 rather than 400, so the token is
/// matched exactly (no case folding) against this set.
const NOT_IMPLEMENTED_METHODS: [&str; 5] = ["POST", "PUT", "DELETE", "OPTIONS", "TRACE"];

/// The HTTP request methods this server supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method: returns the header block followed by the resource body.
    GET,
    /// HEAD method: same as GET but only the header block is transferred.
    HEAD,
}

impl Method {
    /// Whether a response to this method carries a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Method::GET)
    }
}

// Implement FromStr for Method
impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(Method::GET)
        } else if s.eq_ignore_ascii_case("HEAD") {
            Ok(Method::HEAD)
        } else if NOT_IMPLEMENTED_METHODS.contains(&s) {
            Err(Error::NotImplemented(s.to_string()))
        } else {
            Err(Error::UnrecognizedMethod(s.to_string()))
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
