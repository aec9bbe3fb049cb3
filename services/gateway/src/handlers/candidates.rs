use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::CandidatesResponse;
use crate::state::AppState;
use axum::{Json, extract::State};

pub async fn list_candidates(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<CandidatesResponse>, AppError> {
    state.directory.observe(user.identity);

    let roster = state.directory.roster();
    let candidates = state.engine.candidates(user.identity, &roster);
    Ok(Json(CandidatesResponse { candidates }))
}
