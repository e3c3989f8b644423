// src/server/mod.rs
// =============================================================================
// The two network faces of the service:
// - ws: websocket endpoint that runs the pipeline for each submitted URL
// - download: plain HTTP endpoint serving the latest spreadsheet
//
// Both run in the same process, on separate listeners, until Ctrl-C.
// =============================================================================

mod download;
mod ws;

use std::future::IntoFuture;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::pipeline::Pipeline;

// Binds both listeners from the configuration and serves until interrupted
pub async fn run(config: &Config, pipeline: Arc<Pipeline>) -> Result<()> {
    let ws_listener = TcpListener::bind(&config.ws_addr)
        .await
        .with_context(|| format!("Could not bind websocket address {}", config.ws_addr))?;
    let http_listener = TcpListener::bind(&config.http_addr)
        .await
        .with_context(|| format!("Could not bind download address {}", config.http_addr))?;

    info!("Websocket listening on ws://{}", ws_listener.local_addr()?);
    info!(
        "Downloads served at http://{}/download",
        http_listener.local_addr()?
    );

    tokio::select! {
        result = serve(ws_listener, http_listener, pipeline) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
            Ok(())
        }
    }
}

// Serves on already bound listeners (tests bind to port 0)
pub async fn serve(
    ws_listener: TcpListener,
    http_listener: TcpListener,
    pipeline: Arc<Pipeline>,
) -> Result<()> {
    let export_path = pipeline.exporter().path().to_path_buf();

    let ws = axum::serve(ws_listener, ws::router(pipeline)).into_future();
    let http = axum::serve(http_listener, download::router(export_path)).into_future();

    tokio::try_join!(ws, http)?;
    Ok(())
}
