//! Error taxonomy for the matchmaking core
//!
//! Comprehensive error taxonomy using thiserror. Concurrency conflicts on
//! match creation are absorbed internally and never appear here; both racing
//! callers observe success with the same match id.

use crate::ids::MatchId;
use thiserror::Error;

/// Errors surfaced by the core engine operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Malformed input, rejected before touching any store
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A swipe whose actor and target are the same identity
    #[error("Swipe target must differ from the acting identity")]
    SelfSwipe,

    /// Unknown match id
    #[error("Match not found: {match_id}")]
    NotFound { match_id: MatchId },

    /// A non-participant touching a match's channel
    #[error("Identity is not a participant of this match")]
    Forbidden,

    /// Persisted-state failure; fatal to the triggering request, never
    /// retried silently
    #[error("Store error: {0}")]
    Store(String),
}
