//! WebSocket handler
//!
//! Runs the per-connection session loop: register, send the snapshot,
//! then process inbound requests until the transport closes.

use std::sync::Arc;

use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use newsroom_core::DomainError;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::connection::{Connection, ConnectionState};
use crate::handlers::{HandlerError, MessageDispatcher};
use crate::protocol::ServerEvent;
use crate::server::GatewayState;

/// Channel buffer size for outgoing frames
const MESSAGE_BUFFER_SIZE: usize = 64;

/// WebSocket gateway handler
pub async fn gateway_handler(
    State(state): State<GatewayState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(state, socket))
}

/// Handle an upgraded WebSocket connection
async fn handle_socket(state: GatewayState, socket: axum::extract::ws::WebSocket) {
    let session_id = Uuid::new_v4().to_string();

    // Outgoing frames flow through this channel; the send task owns the sink
    let (tx, mut rx) = mpsc::channel::<String>(MESSAGE_BUFFER_SIZE);

    let connection = state
        .connection_manager()
        .add_connection(session_id.clone(), tx);

    tracing::info!(
        session_id = %session_id,
        connections = state.connection_manager().connection_count(),
        "WebSocket connection established"
    );

    let (mut ws_sink, mut ws_stream) = socket.split();

    let session_id_send = session_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if ws_sink.send(Message::Text(frame.into())).await.is_err() {
                tracing::warn!(
                    session_id = %session_id_send,
                    "Failed to send frame to WebSocket"
                );
                break;
            }
        }

        // Close the WebSocket when the channel is closed
        let _ = ws_sink.close().await;
    });

    // Snapshot goes to this connection only; a failed fetch reports an
    // error but keeps the session alive
    send_snapshot(&state, &connection).await;
    connection.set_state(ConnectionState::Active).await;

    let state_recv = state.clone();
    let connection_recv = connection.clone();
    let recv_task = tokio::spawn(async move {
        while let Some(msg) = ws_stream.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    handle_text_frame(&state_recv, &connection_recv, &text).await;
                }
                Ok(Message::Binary(_)) => {
                    tracing::debug!(
                        session_id = %connection_recv.session_id(),
                        "Binary frame rejected"
                    );
                    reply_error(&connection_recv, "Invalid message format").await;
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {
                    // Handled by the transport
                }
                Ok(Message::Close(_)) => {
                    tracing::info!(
                        session_id = %connection_recv.session_id(),
                        "Client closed connection"
                    );
                    break;
                }
                Err(e) => {
                    tracing::warn!(
                        session_id = %connection_recv.session_id(),
                        error = %e,
                        "WebSocket transport error"
                    );
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = recv_task => {
            tracing::debug!(session_id = %session_id, "Receive task ended");
        }
        _ = send_task => {
            tracing::debug!(session_id = %session_id, "Send task ended");
        }
    }

    state.connection_manager().remove_connection(&session_id).await;
    tracing::info!(session_id = %session_id, "Connection closed");
}

/// Load the full feed for a new connection
async fn load_snapshot(state: &GatewayState) -> Result<ServerEvent, DomainError> {
    let articles = state.articles().list().await?;
    let categories = state.categories().list().await?;
    Ok(ServerEvent::InitialData {
        articles,
        categories,
    })
}

/// Fetch the full feed and deliver it as INITIAL_DATA
async fn send_snapshot(state: &GatewayState, connection: &Arc<Connection>) {
    let event = match load_snapshot(state).await {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(
                session_id = %connection.session_id(),
                error = %e,
                "Failed to load initial snapshot"
            );
            ServerEvent::error(HandlerError::Domain(e).client_message())
        }
    };

    if let Ok(frame) = event.to_json() {
        if connection.send(frame).await.is_err() {
            tracing::warn!(
                session_id = %connection.session_id(),
                "Failed to deliver initial snapshot"
            );
        }
    }
}

/// Process one inbound text frame
///
/// Errors become an ERROR event to the sender; the session stays open.
async fn handle_text_frame(state: &GatewayState, connection: &Arc<Connection>, text: &str) {
    if let Err(e) = MessageDispatcher::dispatch(state, connection, text).await {
        tracing::debug!(
            session_id = %connection.session_id(),
            error = %e,
            "Request failed"
        );
        reply_error(connection, e.client_message()).await;
    }
}

/// Send an ERROR event to a single connection
async fn reply_error(connection: &Arc<Connection>, message: impl Into<String>) {
    let event = ServerEvent::error(message);
    if let Ok(frame) = event.to_json() {
        let _ = connection.send(frame).await;
    }
}
