//! Channel message types
//!
//! A message is immutable once persisted. Its `sequence` is strictly
//! increasing within a single match, assigned by the channel broker, and
//! never reused.

use crate::ids::{IdentityId, MatchId, MessageId};
use serde::{Deserialize, Serialize};

/// Maximum accepted message content length in bytes
pub const MAX_CONTENT_LEN: usize = 4096;

/// One persisted channel message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: MessageId,
    pub match_id: MatchId,
    pub sender_id: IdentityId,
    pub content: String,
    /// Strictly increasing per match, starting at 1
    pub sequence: u64,
    /// Unix nanoseconds
    pub sent_at: i64,
}

impl Message {
    pub fn new(
        match_id: MatchId,
        sender_id: IdentityId,
        content: String,
        sequence: u64,
        sent_at: i64,
    ) -> Self {
        Self {
            message_id: MessageId::new(),
            match_id,
            sender_id,
            content,
            sequence,
            sent_at,
        }
    }
}
