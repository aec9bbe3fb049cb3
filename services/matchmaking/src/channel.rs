//! Channel broker
//!
//! Per-match ordered message log. Sequence assignment for a given match is a
//! single-writer critical section (the channel's write lock), so two messages
//! sent at nearly the same time by the two participants can never receive
//! colliding or out-of-order sequence numbers. History reads take the shared
//! lock and never block writers beyond one append.

use crate::events::EventBus;
use crate::registry::MatchRegistry;
use dashmap::DashMap;
use std::sync::{Arc, RwLock};
use types::errors::CoreError;
use types::ids::{IdentityId, MatchId};
use types::message::{Message, MAX_CONTENT_LEN};

/// Ordered log and sequence counter for one match's channel
struct ChannelLog {
    next_sequence: u64,
    messages: Vec<Message>,
}

impl ChannelLog {
    fn new() -> Self {
        Self {
            next_sequence: 1,
            messages: Vec::new(),
        }
    }
}

/// Per-match ordered message log with membership enforcement
pub struct ChannelBroker {
    registry: Arc<MatchRegistry>,
    bus: Arc<EventBus>,
    channels: DashMap<MatchId, Arc<RwLock<ChannelLog>>>,
}

impl ChannelBroker {
    pub fn new(registry: Arc<MatchRegistry>, bus: Arc<EventBus>) -> Self {
        Self {
            registry,
            bus,
            channels: DashMap::new(),
        }
    }

    fn validate_content(content: &str) -> Result<(), CoreError> {
        if content.trim().is_empty() {
            return Err(CoreError::Validation("empty message content".to_string()));
        }
        if content.len() > MAX_CONTENT_LEN {
            return Err(CoreError::Validation(format!(
                "message content exceeds {} bytes",
                MAX_CONTENT_LEN
            )));
        }
        Ok(())
    }

    /// Persist a message and fan out a `message` event to both participants.
    ///
    /// Input is validated before any store is touched. The sender must be a
    /// participant of a known match.
    pub fn append(
        &self,
        match_id: MatchId,
        sender: IdentityId,
        content: String,
        sent_at: i64,
    ) -> Result<Message, CoreError> {
        Self::validate_content(&content)?;

        let m = self
            .registry
            .get(match_id)
            .ok_or(CoreError::NotFound { match_id })?;
        if !m.contains(sender) {
            return Err(CoreError::Forbidden);
        }

        let channel = Arc::clone(
            self.channels
                .entry(match_id)
                .or_insert_with(|| Arc::new(RwLock::new(ChannelLog::new())))
                .value(),
        );

        let msg = {
            let mut log = channel
                .write()
                .map_err(|_| CoreError::Store("channel log lock poisoned".to_string()))?;
            let sequence = log.next_sequence;
            log.next_sequence += 1;
            let msg = Message::new(match_id, sender, content, sequence, sent_at);
            log.messages.push(msg.clone());
            msg
        };

        tracing::debug!(match_id = %match_id, sequence = msg.sequence, "message persisted");
        self.bus.message_appended(&msg, m.participants());
        Ok(msg)
    }

    /// All messages of the match, ascending by sequence.
    ///
    /// Pure read, safe to call repeatedly. A matched pair that has never
    /// chatted gets an empty history.
    pub fn history(&self, match_id: MatchId, requester: IdentityId) -> Result<Vec<Message>, CoreError> {
        let m = self
            .registry
            .get(match_id)
            .ok_or(CoreError::NotFound { match_id })?;
        if !m.contains(requester) {
            return Err(CoreError::Forbidden);
        }

        let Some(channel) = self.channels.get(&match_id).map(|c| Arc::clone(c.value())) else {
            return Ok(Vec::new());
        };
        let log = channel
            .read()
            .map_err(|_| CoreError::Store("channel log lock poisoned".to_string()))?;
        Ok(log.messages.clone())
    }
}
