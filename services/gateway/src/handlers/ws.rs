use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Response, AppError> {
    // 1. Rate limiting
    state
        .rate_limiter
        .check_rate_limit(&format!("{}:ws_connections", user.identity), 10, 10.0)?;

    state.directory.observe(user.identity);

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, user)))
}

async fn handle_socket(socket: WebSocket, state: AppState, user: AuthenticatedUser) {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let connection = state.engine.connect(user.identity, events_tx);

    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            event = events_rx.recv() => {
                let Some(event) = event else { break };
                let payload = match serde_json::to_string(&event) {
                    Ok(payload) => payload,
                    Err(e) => {
                        tracing::error!(error = %e, "failed to serialize live event");
                        continue;
                    }
                };
                if ws_tx.send(Message::Text(payload.into())).await.is_err() {
                    break;
                }
            }
            incoming = ws_rx.next() => {
                match incoming {
                    // Inbound traffic goes over the REST surface; client
                    // frames other than close are ignored
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    state.engine.disconnect(connection);
}
