//! HTTP server implementation for wheelhttp-rs.
//!
//! This module ties the classifier to the filesystem: it accepts
//! connections, reads one request line each, and serves files from the
//! configured root directory.

mod response;
mod config;
mod content;
mod error;
mod http_server;

// Re-export public items
pub use response::{ResponseHead, StatusCode, SERVER_NAME};
pub use config::{port_from_arg, valid_port, ServerConfig, DEFAULT_PORT};
pub use content::ContentKind;
pub use error::Error;
pub use http_server::HttpServer;
