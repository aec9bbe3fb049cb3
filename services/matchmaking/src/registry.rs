//! Match registry
//!
//! Stores established matches, one per unordered identity pair, and enforces
//! pair uniqueness for the lifetime of the process. `create_if_absent` is the
//! single write path and is atomic with respect to the canonical pair key:
//! of two racing creators exactly one wins, and the loser observes the
//! winner's match.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use types::ids::{IdentityId, MatchId};
use types::matches::{Match, MatchSummary, PairKey};

/// Store of established matches with pair-uniqueness enforcement
pub struct MatchRegistry {
    /// Canonical pair key -> match id; the uniqueness invariant lives here
    by_pair: DashMap<PairKey, MatchId>,
    /// Match id -> match
    matches: DashMap<MatchId, Match>,
    /// Identity -> ids of matches it participates in
    by_identity: DashMap<IdentityId, Vec<MatchId>>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self {
            by_pair: DashMap::new(),
            matches: DashMap::new(),
            by_identity: DashMap::new(),
        }
    }

    /// Atomic check-and-create for the pair.
    ///
    /// Returns the match and whether this call created it. Two concurrent
    /// calls for the same pair observe a single winner; the loser gets the
    /// winner's match with `created == false`. The entry guard on the pair
    /// key is the per-pair critical section.
    pub fn create_if_absent(&self, pair: PairKey, created_at: i64) -> (Match, bool) {
        match self.by_pair.entry(pair) {
            Entry::Occupied(existing) => {
                let match_id = *existing.get();
                // Inserted into `matches` before `by_pair` on the create
                // path, so the lookup cannot miss.
                let m = self
                    .matches
                    .get(&match_id)
                    .map(|m| m.clone())
                    .expect("match indexed by pair must exist");
                (m, false)
            }
            Entry::Vacant(slot) => {
                let m = Match::new(pair, created_at);
                self.matches.insert(m.match_id, m.clone());
                for participant in pair.members() {
                    self.by_identity
                        .entry(participant)
                        .or_default()
                        .push(m.match_id);
                }
                slot.insert(m.match_id);
                (m, true)
            }
        }
    }

    pub fn get(&self, match_id: MatchId) -> Option<Match> {
        self.matches.get(&match_id).map(|m| m.clone())
    }

    /// Every match the identity participates in.
    pub fn list_for(&self, identity: IdentityId) -> Vec<MatchSummary> {
        let Some(match_ids) = self.by_identity.get(&identity) else {
            return Vec::new();
        };
        match_ids
            .iter()
            .filter_map(|id| self.matches.get(id))
            .filter_map(|m| {
                m.other(identity).map(|other_id| MatchSummary {
                    match_id: m.match_id,
                    other_id,
                    created_at: m.created_at,
                })
            })
            .collect()
    }

    pub fn is_participant(&self, match_id: MatchId, identity: IdentityId) -> bool {
        self.matches
            .get(&match_id)
            .map(|m| m.contains(identity))
            .unwrap_or(false)
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_if_absent_creates_once() {
        let registry = MatchRegistry::new();
        let a = IdentityId::new();
        let b = IdentityId::new();
        let pair = PairKey::new(a, b);

        let (first, created) = registry.create_if_absent(pair, 1);
        assert!(created);

        let (second, created_again) = registry.create_if_absent(pair, 2);
        assert!(!created_again);
        assert_eq!(first.match_id, second.match_id);
        // Original creation time is retained
        assert_eq!(second.created_at, 1);
    }

    #[test]
    fn test_pair_key_order_does_not_matter() {
        let registry = MatchRegistry::new();
        let a = IdentityId::new();
        let b = IdentityId::new();

        let (first, _) = registry.create_if_absent(PairKey::new(a, b), 1);
        let (second, created) = registry.create_if_absent(PairKey::new(b, a), 2);
        assert!(!created);
        assert_eq!(first.match_id, second.match_id);
    }

    #[test]
    fn test_get() {
        let registry = MatchRegistry::new();
        let pair = PairKey::new(IdentityId::new(), IdentityId::new());
        let (m, _) = registry.create_if_absent(pair, 1);

        assert_eq!(registry.get(m.match_id), Some(m));
        assert_eq!(registry.get(MatchId::new()), None);
    }

    #[test]
    fn test_list_for() {
        let registry = MatchRegistry::new();
        let a = IdentityId::new();
        let b = IdentityId::new();
        let c = IdentityId::new();

        let (m_ab, _) = registry.create_if_absent(PairKey::new(a, b), 1);
        let (m_ac, _) = registry.create_if_absent(PairKey::new(a, c), 2);

        let for_a = registry.list_for(a);
        assert_eq!(for_a.len(), 2);
        let others: Vec<IdentityId> = for_a.iter().map(|s| s.other_id).collect();
        assert!(others.contains(&b));
        assert!(others.contains(&c));

        let for_b = registry.list_for(b);
        assert_eq!(for_b.len(), 1);
        assert_eq!(for_b[0].match_id, m_ab.match_id);
        assert_eq!(for_b[0].other_id, a);

        let for_c = registry.list_for(c);
        assert_eq!(for_c.len(), 1);
        assert_eq!(for_c[0].match_id, m_ac.match_id);

        assert!(registry.list_for(IdentityId::new()).is_empty());
    }

    #[test]
    fn test_is_participant() {
        let registry = MatchRegistry::new();
        let a = IdentityId::new();
        let b = IdentityId::new();
        let outsider = IdentityId::new();
        let (m, _) = registry.create_if_absent(PairKey::new(a, b), 1);

        assert!(registry.is_participant(m.match_id, a));
        assert!(registry.is_participant(m.match_id, b));
        assert!(!registry.is_participant(m.match_id, outsider));
        assert!(!registry.is_participant(MatchId::new(), a));
    }
}
