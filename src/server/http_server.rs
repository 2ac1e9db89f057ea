//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::signal;
use log::{debug, info, warn, error};

use crate::parser::{classify_request_line, Error as ParserError};
use crate::server::config::ServerConfig;
use crate::server::content::ContentKind;
use crate::server::error::Error;
use crate::server::response::{ResponseHead, StatusCode};

/// An HTTP server serving files from a root directory.
///
/// Each accepted connection carries exactly one request. The response is
/// written, the socket is closed, and the body (when present) runs until
/// that close rather than being length-prefixed.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Display the server banner and configuration.
    fn display_server_info(&self) {
        let banner = include_str!("../banner.txt");
        info!("\n{banner}");
        info!("Serving files from {root}", root = self.config.root_dir.display());
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(self.config.addr()).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr());
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: Arc<mpsc::Sender<()>>, tasks: &mut JoinSet<()>) {
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Hand a newly accepted connection off to its own task.
    ///
    /// When the connection limit is reached the socket is dropped without a
    /// response. A failed connection never takes the server down with it.
    async fn handle_new_connection(
        mut socket: tokio::net::TcpStream,
        addr: SocketAddr,
        semaphore: Arc<tokio::sync::Semaphore>,
        config: Arc<ServerConfig>,
        tasks: &mut JoinSet<()>,
    ) {
        // Try to acquire a permit from the semaphore
        let permit = match semaphore.clone().try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!("Connection limit reached, dropping connection from {addr}");
                return;
            }
        };

        info!("Accepted connection from {addr}");

        tasks.spawn(async move {
            // The permit is dropped when the task completes, releasing the semaphore slot
            let _permit = permit;

            if let Err(e) = Self::handle_connection(&mut socket, &config).await {
                error!("Connection from {addr} closed: {e}");
            }
        });
    }

    /// Handle accept errors, returning `true` when the loop should stop.
    async fn handle_accept_error(e: std::io::Error) -> bool {
        error!("Error accepting connection: {e}");

        if e.kind() == std::io::ErrorKind::BrokenPipe {
            error!("Critical error accepting connection, shutting down");
            return true;
        }

        // For other errors, wait a bit before retrying
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        false
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        // Wait for all tasks to complete (with timeout)
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let _ = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        }).await;

        info!("Server shutdown complete");
    }

    /// Start the server and listen for incoming connections.
    pub async fn start(&self) -> Result<(), Error> {
        // Display server information
        self.display_server_info();

        // Set up the TCP listener
        let listener = self.setup_listener().await?;

        // Create a semaphore to limit concurrent connections
        let semaphore = Arc::new(tokio::sync::Semaphore::new(self.config.max_connections));

        // Create a channel for shutdown signaling
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let shutdown_tx = Arc::new(shutdown_tx);

        let config = Arc::new(self.config.clone());

        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();

        // Set up a Ctrl+C handler for graceful shutdown
        Self::setup_ctrl_c_handler(shutdown_tx.clone(), &mut tasks);

        loop {
            tokio::select! {
                // Check for shutdown signal
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                // Accept new connections
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(
                                socket,
                                addr,
                                semaphore.clone(),
                                config.clone(),
                                &mut tasks
                            ).await;
                        },
                        Err(e) => {
                            if Self::handle_accept_error(e).await {
                                break;
                            }
                        }
                    }
                }
            }
        }

        // Perform graceful shutdown
        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    /// Handle a single connection.
    ///
    /// Reads one request line, writes one response and closes the socket.
    /// A line that overruns the configured cap is rejected as malformed.
    /// Rejected requests and unopenable files still produce a complete
    /// header block before the error is returned to the caller.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        config: &ServerConfig,
    ) -> Result<(), Error> {
        // Read the request line, up to the configured cap. A closed or
        // empty connection yields an empty line and is rejected below.
        let mut line_buf = Vec::new();
        {
            let mut reader = BufReader::new((&mut *socket).take(config.max_request_line as u64));
            reader.read_until(b'\n', &mut line_buf).await?;
        }
        let line = String::from_utf8_lossy(&line_buf);
        debug!("Received request line '{line}'", line = line.trim_end());

        // A buffer that fills the cap without reaching the terminator holds
        // a truncated line whose prefix must not pass for the whole request.
        let truncated =
            line_buf.len() >= config.max_request_line && line_buf.last() != Some(&b'\n');

        // Classify before touching the filesystem
        let classified = if truncated {
            Err(ParserError::MalformedRequestLine(line.trim_end().to_string()))
        } else {
            classify_request_line(&line)
        };
        let request = match classified {
            Ok(request) => request,
            Err(e) => {
                Self::finish_with_status(&mut *socket, StatusCode::from(&e)).await?;
                return Err(Error::Rejected(e));
            }
        };

        info!("Client requested '{target}'", target = request.raw_target);

        // Any path that cannot be opened is reported as missing; 500 is
        // reserved for failures after the file is open.
        let path = config.root_dir.join(&request.resolved_path);
        let file = match File::open(&path).await {
            Ok(file) => file,
            Err(_) => {
                Self::finish_with_status(&mut *socket, StatusCode::NotFound).await?;
                return Err(Error::NotFound(request.resolved_path));
            }
        };

        // Opening a directory succeeds on some platforms, reading it never does
        match file.metadata().await {
            Ok(meta) if meta.is_dir() => {
                Self::finish_with_status(&mut *socket, StatusCode::NotFound).await?;
                return Err(Error::NotFound(request.resolved_path));
            }
            Ok(_) => {}
            Err(e) => {
                Self::finish_with_status(&mut *socket, StatusCode::InternalServerError).await?;
                return Err(Error::Io(e));
            }
        }

        let content = ContentKind::classify(&request.resolved_path);
        let head = ResponseHead::new(StatusCode::Ok).with_content(content);
        socket.write_all(&head.to_bytes()).await?;

        if request.method.has_body() {
            Self::stream_file_lines(BufReader::new(file), &mut *socket).await?;
        }

        socket.flush().await?;
        socket.shutdown().await?;
        Ok(())
    }

    /// Write a body-less header block and close the socket.
    async fn finish_with_status(
        socket: &mut (impl AsyncWrite + Unpin),
        status: StatusCode,
    ) -> Result<(), std::io::Error> {
        socket.write_all(&ResponseHead::new(status).to_bytes()).await?;
        socket.flush().await?;
        socket.shutdown().await
    }

    /// Stream a body line by line, re-terminating every line with CRLF.
    ///
    /// The original line endings are discarded, and the final line gains a
    /// CRLF it may never have had. Files whose bytes are not line-structured
    /// text are therefore not delivered byte-for-byte.
    pub(crate) async fn stream_file_lines(
        mut reader: impl AsyncBufRead + Unpin,
        writer: &mut (impl AsyncWrite + Unpin),
    ) -> Result<(), std::io::Error> {
        let mut line = Vec::new();
        loop {
            line.clear();
            let n = reader.read_until(b'\n', &mut line).await?;
            if n == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
            }
            writer.write_all(&line).await?;
            writer.write_all(b"\r\n").await?;
        }
        Ok(())
    }
}
