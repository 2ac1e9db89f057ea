//! A minimal HTTP/1.0 static file server.
//!
//! The crate is split into a request classifier and the server built on top
//! of it. The classifier reads a single request line and decides, without
//! touching the filesystem, whether the request is malformed, unsupported,
//! forbidden, or a serviceable `GET`/`HEAD`. The server maps that outcome,
//! plus the result of opening the requested file, onto a fixed set of six
//! status codes and writes one response per connection.
//!
//! # Examples
//!
//! ## Classifying a request line
//!
//! ```
//! use wheelhttp_rs::{classify_request_line, Method};
//!
//! let request = classify_request_line("GET /index.html HTTP/1.0").unwrap();
//!
//! assert_eq!(request.method, Method::GET);
//! assert_eq!(request.raw_target, "/index.html");
//! assert_eq!(request.resolved_path, "index.html");
//! ```
//!
//! ## Handling rejections
//!
//! ```
//! use wheelhttp_rs::{classify_request_line, ParserError};
//!
//! match classify_request_line("POST /form HTTP/1.0") {
//!     Ok(_) => println!("Serviceable request"),
//!     Err(ParserError::NotImplemented(method)) => println!("No support for {method}"),
//!     Err(err) => println!("Rejected: {err}"),
//! }
//! ```
//!
//! ## Building a response head
//!
//! ```
//! use wheelhttp_rs::{ContentKind, ResponseHead, StatusCode};
//!
//! let head = ResponseHead::new(StatusCode::Ok)
//!     .with_content(ContentKind::classify("logo.gif"));
//!
//! let text = String::from_utf8(head.to_bytes()).unwrap();
//! assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
//! assert!(text.contains("Content-Type: image/gif\r\n"));
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use wheelhttp_rs::{HttpServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig {
//!         port: 8080,
//!         ..ServerConfig::default()
//!     };
//!
//!     HttpServer::new(config).start().await?;
//!     Ok(())
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{classify_request_line, Error as ParserError, HttpRequest, Method};
pub use server::{
    port_from_arg, valid_port, ContentKind, Error as ServerError, HttpServer, ResponseHead,
    ServerConfig, StatusCode, DEFAULT_PORT, SERVER_NAME,
};
