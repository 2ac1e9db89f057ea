//! Binary entry point for the wheelhttp-rs file server.
//!
//! Takes an optional port as the first command line argument and serves
//! files from the current working directory.

use log::info;
use wheelhttp_rs::{port_from_arg, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger, reporting at info level unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port_arg = std::env::args().nth(1);
    let config = ServerConfig {
        port: port_from_arg(port_arg.as_deref()),
        ..ServerConfig::default()
    };

    info!("Starting server on port {port}", port = config.port);

    // Start the server
    let server = HttpServer::new(config);
    server.start().await?;

    Ok(())
}
