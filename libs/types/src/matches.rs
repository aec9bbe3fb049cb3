//! Match and canonical pair-key types
//!
//! A match is the outcome of mutual likes between two distinct identities.
//! At most one match exists per unordered identity pair for the lifetime of
//! the system, and a match is immutable once created.

use crate::ids::{IdentityId, MatchId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical key for an unordered identity pair
///
/// The two identities are stored sorted, so `{A, B}` and `{B, A}` produce the
/// same key. This key is what the pair-uniqueness invariant hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    first: IdentityId,
    second: IdentityId,
}

impl PairKey {
    /// Build the canonical key for two distinct identities.
    ///
    /// # Panics
    /// Panics if both identities are equal; self-pairs are rejected upstream
    /// before any key is formed.
    pub fn new(a: IdentityId, b: IdentityId) -> Self {
        assert!(a != b, "PairKey requires two distinct identities");
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> IdentityId {
        self.first
    }

    pub fn second(&self) -> IdentityId {
        self.second
    }

    /// Both members of the pair, canonical order.
    pub fn members(&self) -> [IdentityId; 2] {
        [self.first, self.second]
    }

    pub fn contains(&self, identity: IdentityId) -> bool {
        self.first == identity || self.second == identity
    }

    /// The counterpart of `identity` within the pair, if it is a member.
    pub fn other(&self, identity: IdentityId) -> Option<IdentityId> {
        if identity == self.first {
            Some(self.second)
        } else if identity == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.second)
    }
}

/// An established match between two identities
///
/// Terminal state: there is no unmatch, and no field changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub match_id: MatchId,
    pub pair: PairKey,
    /// Unix nanoseconds
    pub created_at: i64,
}

impl Match {
    pub fn new(pair: PairKey, created_at: i64) -> Self {
        Self {
            match_id: MatchId::new(),
            pair,
            created_at,
        }
    }

    pub fn contains(&self, identity: IdentityId) -> bool {
        self.pair.contains(identity)
    }

    /// Both participants, canonical order.
    pub fn participants(&self) -> [IdentityId; 2] {
        self.pair.members()
    }

    /// The other participant from `identity`'s point of view.
    pub fn other(&self, identity: IdentityId) -> Option<IdentityId> {
        self.pair.other(identity)
    }
}

/// One row of a per-identity match listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub other_id: IdentityId,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_is_canonical() {
        let a = IdentityId::new();
        let b = IdentityId::new();

        let ab = PairKey::new(a, b);
        let ba = PairKey::new(b, a);
        assert_eq!(ab, ba);
        assert_eq!(ab.members(), ba.members());
    }

    #[test]
    #[should_panic(expected = "distinct identities")]
    fn test_pair_key_rejects_self_pair() {
        let a = IdentityId::new();
        PairKey::new(a, a);
    }

    #[test]
    fn test_pair_key_membership() {
        let a = IdentityId::new();
        let b = IdentityId::new();
        let c = IdentityId::new();
        let key = PairKey::new(a, b);

        assert!(key.contains(a));
        assert!(key.contains(b));
        assert!(!key.contains(c));

        assert_eq!(key.other(a), Some(b));
        assert_eq!(key.other(b), Some(a));
        assert_eq!(key.other(c), None);
    }

    #[test]
    fn test_match_creation() {
        let a = IdentityId::new();
        let b = IdentityId::new();
        let m = Match::new(PairKey::new(a, b), 1708123456789000000);

        assert!(m.contains(a));
        assert!(m.contains(b));
        assert_eq!(m.other(a), Some(b));
        assert_eq!(m.created_at, 1708123456789000000);
    }

    #[test]
    fn test_match_serialization() {
        let m = Match::new(
            PairKey::new(IdentityId::new(), IdentityId::new()),
            1708123456789000000,
        );
        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    proptest::proptest! {
        #[test]
        fn prop_pair_key_ignores_argument_order(a in proptest::num::u128::ANY, b in proptest::num::u128::ANY) {
            proptest::prop_assume!(a != b);
            let left = IdentityId::from_uuid(uuid::Uuid::from_u128(a));
            let right = IdentityId::from_uuid(uuid::Uuid::from_u128(b));
            proptest::prop_assert_eq!(PairKey::new(left, right), PairKey::new(right, left));
        }
    }
}
