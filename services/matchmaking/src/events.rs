//! Live event types and dispatch
//!
//! Defines the typed events flowing from the resolver and channel broker to
//! the presence router, and the thin bus that routes them. Events are raised
//! only after the corresponding state has been persisted.

use crate::presence::PresenceRouter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use types::ids::{IdentityId, MatchId, MessageId};
use types::matches::Match;
use types::message::Message;

/// An event delivered to live connections
///
/// The `matched` payload is personalised per recipient: `other_id` is the
/// recipient's counterpart, matching the shape of a match-listing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    Matched {
        match_id: MatchId,
        other_id: IdentityId,
    },
    Message {
        message_id: MessageId,
        match_id: MatchId,
        sender_id: IdentityId,
        content: String,
        sequence: u64,
        sent_at: i64,
    },
}

impl LiveEvent {
    /// Build the message event for a persisted message.
    pub fn from_message(msg: &Message) -> Self {
        LiveEvent::Message {
            message_id: msg.message_id,
            match_id: msg.match_id,
            sender_id: msg.sender_id,
            content: msg.content.clone(),
            sequence: msg.sequence,
            sent_at: msg.sent_at,
        }
    }
}

/// Thin typed dispatch from business logic to the presence router
pub struct EventBus {
    presence: Arc<PresenceRouter>,
}

impl EventBus {
    pub fn new(presence: Arc<PresenceRouter>) -> Self {
        Self { presence }
    }

    /// Notify both participants of a freshly created match.
    pub fn match_created(&self, m: &Match) {
        for participant in m.participants() {
            // participants() members always have a counterpart
            let Some(other_id) = m.other(participant) else {
                continue;
            };
            self.presence.deliver(
                participant,
                LiveEvent::Matched {
                    match_id: m.match_id,
                    other_id,
                },
            );
        }
    }

    /// Notify both participants of a persisted message.
    pub fn message_appended(&self, msg: &Message, participants: [IdentityId; 2]) {
        let event = LiveEvent::from_message(msg);
        let [a, b] = participants;
        self.presence.deliver(a, event.clone());
        self.presence.deliver(b, event);
    }
}
