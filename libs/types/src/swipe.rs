//! Swipe decision records
//!
//! A swipe is one identity's directional like/pass decision about another.
//! Records are append-only: they are never mutated or deleted, and repeated
//! decisions for the same ordered pair accumulate as history.

use crate::ids::IdentityId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two possible swipe decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDecision {
    Like,
    Pass,
}

impl SwipeDecision {
    pub fn is_like(&self) -> bool {
        matches!(self, SwipeDecision::Like)
    }
}

impl fmt::Display for SwipeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeDecision::Like => write!(f, "like"),
            SwipeDecision::Pass => write!(f, "pass"),
        }
    }
}

/// Error returned when parsing an unknown decision string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDecisionError(pub String);

impl fmt::Display for ParseDecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown swipe decision: {}", self.0)
    }
}

impl std::error::Error for ParseDecisionError {}

impl FromStr for SwipeDecision {
    type Err = ParseDecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(SwipeDecision::Like),
            "pass" => Ok(SwipeDecision::Pass),
            other => Err(ParseDecisionError(other.to_string())),
        }
    }
}

/// One immutable swipe record
///
/// `recorded_at` is Unix nanoseconds supplied by the caller, keeping the
/// core deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeRecord {
    pub actor: IdentityId,
    pub target: IdentityId,
    pub decision: SwipeDecision,
    pub recorded_at: i64,
}

impl SwipeRecord {
    pub fn new(
        actor: IdentityId,
        target: IdentityId,
        decision: SwipeDecision,
        recorded_at: i64,
    ) -> Self {
        Self {
            actor,
            target,
            decision,
            recorded_at,
        }
    }
}
