use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::handlers::now_nanos;
use crate::models::{MatchRow, SendMessageRequest};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use types::ids::MatchId;
use types::message::Message;

pub async fn list_matches(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<MatchRow>>, AppError> {
    let rows = state
        .engine
        .list_matches(user.identity)
        .into_iter()
        .map(MatchRow::from)
        .collect();
    Ok(Json(rows))
}

pub async fn get_messages(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(match_id): Path<MatchId>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = state.engine.history(user.identity, match_id)?;
    Ok(Json(messages))
}

pub async fn send_message(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(match_id): Path<MatchId>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<Message>, AppError> {
    state
        .rate_limiter
        .check_rate_limit(&format!("{}:messages", user.identity), 50, 50.0)?;

    let message =
        state
            .engine
            .send_message(user.identity, match_id, payload.content, now_nanos())?;
    Ok(Json(message))
}
