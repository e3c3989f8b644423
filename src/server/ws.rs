// src/server/ws.rs
// =============================================================================
// Websocket endpoint: one `{"url": ...}` text frame in, one JSON reply out.
// Any request path is accepted for the upgrade.
//
// Frames of one connection are handled strictly in order: the next frame is
// not read until the reply to the current one has been sent. Separate
// connections run concurrently, each on its own task.
// =============================================================================

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use futures::StreamExt;
use log::{debug, warn};

use crate::pipeline::Pipeline;

// Upgrades on any path, `/` included
pub fn router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/", get(upgrade))
        .fallback(upgrade)
        .with_state(pipeline)
}

async fn upgrade(ws: WebSocketUpgrade, State(pipeline): State<Arc<Pipeline>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, pipeline))
}

async fn handle_socket(mut socket: WebSocket, pipeline: Arc<Pipeline>) {
    while let Some(frame) = socket.next().await {
        let text = match frame {
            Ok(Message::Text(text)) => text,
            Ok(Message::Close(_)) => break,
            // ping/pong are answered by axum, binary frames carry no request
            Ok(_) => continue,
            Err(e) => {
                warn!("Websocket receive error: {}", e);
                break;
            }
        };

        let reply = pipeline.respond_to_message(&text).await;

        if let Err(e) = socket.send(Message::Text(reply)).await {
            debug!("Client went away before the reply was sent: {}", e);
            break;
        }
    }
}
