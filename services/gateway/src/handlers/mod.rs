pub mod candidates;
pub mod matches;
pub mod swipe;
pub mod ws;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall clock in Unix nanoseconds. Timestamps are minted at the edge
/// so the engine itself stays deterministic.
pub(crate) fn now_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or(0)
}
