//! Live update handler
//!
//! WebSocket endpoint that streams insert events to connected clients. Frames
//! carry the same JSON shape the pub/sub channel uses, so a client can fold
//! them with the same parser it uses elsewhere.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use tokio::sync::broadcast::error::RecvError;

use fund_core::events::DomainEvent;

use crate::state::AppState;

/// WebSocket upgrade for the live insert-event stream
///
/// GET /live
pub async fn live_updates(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(state, socket))
}

/// Drive one upgraded connection until either side hangs up
async fn handle_socket(state: AppState, mut socket: WebSocket) {
    let mut events = state.subscribe_events();
    tracing::info!("Live connection established");

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(record) => {
                    let event = DomainEvent::from(record);
                    let frame = match serde_json::to_string(&event) {
                        Ok(json) => json,
                        Err(e) => {
                            tracing::warn!(error = %e, "Failed to serialize insert event");
                            continue;
                        }
                    };
                    if socket.send(Message::Text(frame)).await.is_err() {
                        tracing::debug!("Client went away during send");
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    // The client missed events; it should refetch its baseline.
                    tracing::warn!(skipped, "Live connection lagged behind the event stream");
                }
                Err(RecvError::Closed) => {
                    tracing::debug!("Insert-event broadcast closed");
                    break;
                }
            },
            msg = socket.recv() => match msg {
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("Live connection closed by client");
                    break;
                }
                Some(Ok(Message::Ping(payload))) => {
                    if socket.send(Message::Pong(payload)).await.is_err() {
                        break;
                    }
                }
                Some(Ok(_)) => {
                    // The stream is one-way; inbound frames are ignored.
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "WebSocket error");
                    break;
                }
            },
        }
    }
}
