//! Profile-directory collaborator seam
//!
//! The core never owns profile data; it only needs, per identity, a stable id
//! and a roster to filter candidate listings from. This in-memory directory
//! stands in for the external profile service: seeded at startup, extended as
//! identities are seen on authenticated connections.

use dashmap::DashSet;
use types::ids::IdentityId;

/// Roster of known identities
pub struct StaticDirectory {
    identities: DashSet<IdentityId>,
}

impl StaticDirectory {
    pub fn new(seed: Vec<IdentityId>) -> Self {
        let identities = DashSet::new();
        for id in seed {
            identities.insert(id);
        }
        Self { identities }
    }

    /// Record an identity as known. Idempotent.
    pub fn observe(&self, identity: IdentityId) {
        self.identities.insert(identity);
    }

    /// Snapshot of every known identity.
    pub fn roster(&self) -> Vec<IdentityId> {
        self.identities.iter().map(|id| *id).collect()
    }
}
