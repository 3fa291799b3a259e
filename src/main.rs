//! wasmserve - static file server for wasm development builds
//!
//! Serves the working directory first and the cargo
//! `wasm32-unknown-unknown` debug output second, forcing
//! `application/wasm` for `.wasm` artifacts.

use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind before announcing anything; a taken port must abort startup
    let listener = server::create_listener(addr)?;

    let port = cfg.display_port().to_string();
    let state = Arc::new(config::ServerState::new(cfg));

    logger::log_server_start(&port);

    server::run(listener, state).await;
    Ok(())
}
