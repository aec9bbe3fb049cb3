//! Append-only swipe ledger
//!
//! Records every like/pass decision and answers "has A ever liked B?".
//! Records are indexed by ordered `(actor, target)` pair so reciprocity
//! checks are keyed lookups, not scans. "Has liked" means any like record
//! exists for the ordered pair, not just the latest one.

use dashmap::DashMap;
use std::collections::HashSet;
use types::errors::CoreError;
use types::ids::IdentityId;
use types::swipe::{SwipeDecision, SwipeRecord};

/// Append-only record of swipe decisions
///
/// Safe for concurrent appends and reads; appends for distinct ordered pairs
/// never contend.
pub struct SwipeLedger {
    /// Full history per ordered (actor, target) pair
    records: DashMap<(IdentityId, IdentityId), Vec<SwipeRecord>>,
    /// Every target an actor has ever decided on, either decision
    decided: DashMap<IdentityId, HashSet<IdentityId>>,
}

impl SwipeLedger {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            decided: DashMap::new(),
        }
    }

    /// Append a swipe record.
    ///
    /// Rejects `actor == target`. Duplicate decisions for the same ordered
    /// pair always succeed and accumulate as history.
    pub fn record(
        &self,
        actor: IdentityId,
        target: IdentityId,
        decision: SwipeDecision,
        recorded_at: i64,
    ) -> Result<(), CoreError> {
        if actor == target {
            return Err(CoreError::SelfSwipe);
        }

        self.records
            .entry((actor, target))
            .or_default()
            .push(SwipeRecord::new(actor, target, decision, recorded_at));
        self.decided.entry(actor).or_default().insert(target);
        Ok(())
    }

    /// Whether any like record exists for the exact ordered pair.
    pub fn exists_like(&self, actor: IdentityId, target: IdentityId) -> bool {
        self.records
            .get(&(actor, target))
            .map(|history| history.iter().any(|r| r.decision.is_like()))
            .unwrap_or(false)
    }

    /// Every identity the actor has ever swiped on, either decision.
    pub fn decided_targets(&self, actor: IdentityId) -> HashSet<IdentityId> {
        self.decided
            .get(&actor)
            .map(|targets| targets.clone())
            .unwrap_or_default()
    }
}

impl Default for SwipeLedger {
    fn default() -> Self {
        Self::new()
    }
}
