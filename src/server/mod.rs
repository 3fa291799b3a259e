//! Server module
//!
//! Listener construction and the accept loop.

pub mod connection;
pub mod listener;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerState;
use crate::logger;

pub use listener::create_listener;

/// Accept connections until the process is terminated.
///
/// Accept errors are transient (resource exhaustion, aborted handshakes);
/// they are logged and the loop continues.
pub async fn run(listener: TcpListener, state: Arc<ServerState>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::spawn_serve(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
