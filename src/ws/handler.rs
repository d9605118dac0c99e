use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

use super::session::ConnId;
use crate::models::{ClientMessage, ServerMessage};
use crate::state::AppState;

/// Query parameters accepted on the collaboration endpoint. The user name
/// is taken at face value; there is no credential check behind it.
#[derive(Deserialize)]
pub struct ConnectParams {
    pub user: Option<String>,
}

/// WebSocket handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<ConnectParams>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let user = params.user.unwrap_or_else(|| "unknown".to_string());
    info!("New WebSocket connection attempt for user: {}", user);
    ws.on_upgrade(move |socket| handle_socket(socket, user, state))
}

/// Handle one WebSocket connection from handshake to cleanup
async fn handle_socket(socket: WebSocket, user: String, state: Arc<AppState>) {
    let conn = ConnId::new();
    info!(
        "WebSocket connection established for user {} with connection {}",
        user, conn
    );

    // Split the socket; all outbound frames funnel through one channel so
    // the registry never writes to the socket itself
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    // Writer task: encode and push frames until the channel or socket closes
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            let text = match serde_json::to_string(&frame) {
                Ok(text) => text,
                Err(e) => {
                    error!("Failed to encode outbound frame: {}", e);
                    continue;
                }
            };
            if sender.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    let service = state.collab.clone();
    if let Err(e) = service.join(conn, &user, &tx).await {
        error!("Failed to join collaboration session for {}: {}", user, e);
        send_task.abort();
        return;
    }

    // Reader task: dispatch inbound frames in arrival order
    let recv_service = service.clone();
    let recv_user = user.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = receiver.next().await {
            let Message::Text(text) = message else {
                continue;
            };

            let frame: ClientMessage = match serde_json::from_str(&text) {
                Ok(frame) => frame,
                Err(e) => {
                    // A bad frame is reported back but never ends the session
                    info!("Unrecognized frame from {}: {}", recv_user, e);
                    let _ = tx.send(ServerMessage::error(format!(
                        "Unrecognized message: {}",
                        e
                    )));
                    continue;
                }
            };

            match frame {
                ClientMessage::Update(update) => {
                    if let Err(e) = recv_service.update(conn, &recv_user, update).await {
                        error!("Failed to persist update from {}: {}", recv_user, e);
                        let _ = tx.send(ServerMessage::error(format!(
                            "Failed to save document: {}",
                            e
                        )));
                    }
                }
                ClientMessage::Cursor(cursor) => {
                    recv_service.cursor(conn, cursor.position).await;
                }
            }
        }
    });

    // Wait for either task to finish (and finish the other)
    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    service.leave(conn, &user).await;
    info!(
        "WebSocket connection terminated for user {} ({})",
        user, conn
    );
}
