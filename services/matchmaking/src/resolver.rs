//! Match resolver
//!
//! Runs after every recorded like: checks the ledger for a reciprocal like
//! and, when one exists, performs the atomic check-and-create against the
//! match registry. The registry's per-pair critical section makes the whole
//! resolution idempotent: however many times and however close together both
//! sides swipe, exactly one match is created and exactly one matched-event
//! pair is emitted.

use crate::events::EventBus;
use crate::ledger::SwipeLedger;
use crate::registry::MatchRegistry;
use serde::Serialize;
use std::sync::Arc;
use types::ids::{IdentityId, MatchId};
use types::matches::PairKey;

/// Result of submitting a swipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwipeOutcome {
    pub matched: bool,
    pub match_id: Option<MatchId>,
}

impl SwipeOutcome {
    pub fn unmatched() -> Self {
        Self {
            matched: false,
            match_id: None,
        }
    }

    pub fn matched(match_id: MatchId) -> Self {
        Self {
            matched: true,
            match_id: Some(match_id),
        }
    }
}

/// Reciprocity detection and atomic match creation
pub struct MatchResolver {
    ledger: Arc<SwipeLedger>,
    registry: Arc<MatchRegistry>,
    bus: Arc<EventBus>,
}

impl MatchResolver {
    pub fn new(ledger: Arc<SwipeLedger>, registry: Arc<MatchRegistry>, bus: Arc<EventBus>) -> Self {
        Self {
            ledger,
            registry,
            bus,
        }
    }

    /// Resolve a freshly recorded like from `actor` about `target`.
    ///
    /// The caller has already appended the like to the ledger. Events are
    /// emitted only on the call that actually creates the match.
    pub fn resolve_like(&self, actor: IdentityId, target: IdentityId, at: i64) -> SwipeOutcome {
        if !self.ledger.exists_like(target, actor) {
            return SwipeOutcome::unmatched();
        }

        let (m, created) = self.registry.create_if_absent(PairKey::new(actor, target), at);
        if created {
            tracing::info!(match_id = %m.match_id, "match created");
            self.bus.match_created(&m);
        }
        SwipeOutcome::matched(m.match_id)
    }
}
