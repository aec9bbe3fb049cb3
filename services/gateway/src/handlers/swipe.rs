use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::handlers::now_nanos;
use crate::models::{SwipeRequest, SwipeResponse};
use crate::state::AppState;
use axum::{Json, extract::State};
use types::swipe::SwipeDecision;

pub async fn submit_swipe(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<SwipeRequest>,
) -> Result<Json<SwipeResponse>, AppError> {
    // 1. Rate limiting
    state
        .rate_limiter
        .check_rate_limit(&format!("{}:swipes", user.identity), 20, 20.0)?;

    // 2. Validate the decision before touching any store
    let decision: SwipeDecision = payload
        .decision
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid decision: {}", payload.decision)))?;

    // 3. Record and resolve
    let outcome = state
        .engine
        .submit_swipe(user.identity, payload.target_id, decision, now_nanos())?;

    state.directory.observe(user.identity);

    Ok(Json(SwipeResponse {
        matched: outcome.matched,
        match_id: outcome.match_id,
    }))
}
