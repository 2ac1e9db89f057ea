//! Request-line classification and representation.

use std::str::FromStr;

use crate::parser::error::Error;
use crate::parser::method::Method;

/// A classified HTTP request.
///
/// Holds everything the server needs to answer one connection: the verb and
/// the requested resource, both as it appeared on the wire and resolved
/// against the served root. One of these exists per connection and is
/// discarded once the response has been written.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET or HEAD)
    pub method: Method,
    /// The request target exactly as it appeared on the request line
    pub raw_target: String,
    /// The target with its single leading `/` stripped, to be opened
    /// relative to the served root
    pub resolved_path: String,
}

/// Classify one request line into a supported request or a rejection.
///
/// The checks run in a fixed order: the line must split into exactly three
/// whitespace-separated tokens (method, target, version), then the method
/// token must name a supported verb, then the resolved path must not begin
/// with a parent-directory segment. Each failure short-circuits the rest,
/// and no step here touches the filesystem. The version token is counted
/// but never interpreted.
///
/// The method token is matched case-insensitively against the supported
/// verbs, so `get /x HTTP/1.0` and `GET /x HTTP/1.0` classify identically.
/// The resource path is the target with a single leading `/` removed:
/// `/index.html` resolves to `index.html`.
///
/// # Arguments
///
/// * `line` - The first line read from a connection, with or without its
///   trailing CR/LF
///
/// # Returns
///
/// The classified request, or the rejection describing why the line was
/// refused
///
/// # Examples
///
/// ```
/// use wheelhttp_rs::{classify_request_line, Method};
///
/// let request = classify_request_line("GET /index.html HTTP/1.0").unwrap();
/// assert_eq!(request.method, Method::GET);
/// assert_eq!(request.raw_target, "/index.html");
/// assert_eq!(request.resolved_path, "index.html");
/// ```
pub fn classify_request_line(line: &str) -> Result<HttpRequest, Error> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(Error::MalformedRequestLine(line.trim_end().to_string()));
    }

    let method = Method::from_str(tokens[0])?;

    let raw_target = tokens[1];
    let resolved = raw_target.strip_prefix('/').unwrap_or(raw_target);
    if resolved.starts_with("../") {
        return Err(Error::TraversalForbidden(resolved.to_string()));
    }

    Ok(HttpRequest {
        method,
        raw_target: raw_target.to_string(),
        resolved_path: resolved.to_string(),
    })
}
