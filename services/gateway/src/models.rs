use serde::{Deserialize, Serialize};
use types::ids::{IdentityId, MatchId};
use types::matches::MatchSummary;

#[derive(Debug, Clone, Deserialize)]
pub struct SwipeRequest {
    pub target_id: IdentityId,
    /// Parsed in the handler so an unknown decision is a validation error,
    /// rejected before any store is touched
    pub decision: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwipeResponse {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<MatchId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchRow {
    pub match_id: MatchId,
    pub other_id: IdentityId,
    pub created_at: i64,
}

impl From<MatchSummary> for MatchRow {
    fn from(summary: MatchSummary) -> Self {
        Self {
            match_id: summary.match_id,
            other_id: summary.other_id,
            created_at: summary.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidatesResponse {
    pub candidates: Vec<IdentityId>,
}
