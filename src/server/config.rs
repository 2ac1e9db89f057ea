//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use log::warn;

/// The port used when none is given or the given one is rejected.
pub const DEFAULT_PORT: u16 = 80;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The port to bind to on all interfaces.
    pub port: u16,
    /// The directory resolved paths are joined onto.
    pub root_dir: PathBuf,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// The maximum accepted request line length in bytes.
    pub max_request_line: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root_dir: PathBuf::from("."),
            max_connections: 1024,
            max_request_line: 8192,
        }
    }
}

impl ServerConfig {
    /// The socket address to bind the listener to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

/// Whether `port` is accepted for binding.
///
/// Port 80 is always accepted; everything else must sit strictly between
/// 1024 and 65535.
pub fn valid_port(port: u16) -> bool {
    port == 80 || (port > 1024 && port < 65535)
}

/// Resolve the port from an optional command line argument.
///
/// A missing argument silently selects [`DEFAULT_PORT`]. An argument that
/// does not parse as a number, or parses to a rejected port, is reported
/// and [`DEFAULT_PORT`] is used instead.
pub fn port_from_arg(arg: Option<&str>) -> u16 {
    match arg {
        None => DEFAULT_PORT,
        Some(raw) => match raw.parse::<u16>() {
            Ok(port) if valid_port(port) => port,
            Ok(port) => {
                warn!("port {port} is out of range, using port {DEFAULT_PORT}");
                DEFAULT_PORT
            }
            Err(_) => {
                warn!("'{raw}' is not a valid port number, using port {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        },
    }
}
