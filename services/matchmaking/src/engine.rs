//! Matchmaking engine core
//!
//! Main coordinator wiring the swipe ledger, match resolver, channel broker
//! and presence router behind one transport-agnostic API. Callers supply
//! pre-verified identities and Unix-nanosecond timestamps; the engine stays
//! deterministic and free of wall-clock reads.

use crate::channel::ChannelBroker;
use crate::events::{EventBus, LiveEvent};
use crate::ledger::SwipeLedger;
use crate::presence::PresenceRouter;
use crate::registry::MatchRegistry;
use crate::resolver::{MatchResolver, SwipeOutcome};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use types::errors::CoreError;
use types::ids::{ConnectionId, IdentityId, MatchId};
use types::matches::MatchSummary;
use types::message::Message;
use types::swipe::SwipeDecision;

/// Main matchmaking engine
pub struct Matchmaker {
    ledger: Arc<SwipeLedger>,
    registry: Arc<MatchRegistry>,
    resolver: MatchResolver,
    broker: ChannelBroker,
    presence: Arc<PresenceRouter>,
}

impl Matchmaker {
    pub fn new() -> Self {
        let ledger = Arc::new(SwipeLedger::new());
        let registry = Arc::new(MatchRegistry::new());
        let presence = Arc::new(PresenceRouter::new());
        let bus = Arc::new(EventBus::new(Arc::clone(&presence)));
        let resolver = MatchResolver::new(Arc::clone(&ledger), Arc::clone(&registry), Arc::clone(&bus));
        let broker = ChannelBroker::new(Arc::clone(&registry), bus);
        Self {
            ledger,
            registry,
            resolver,
            broker,
            presence,
        }
    }

    /// Record a swipe and resolve any resulting match.
    ///
    /// This is the main entry point. The swipe is appended to the ledger
    /// first; a like then runs reciprocity resolution, which creates the
    /// match and emits the matched events exactly once per pair.
    pub fn submit_swipe(
        &self,
        actor: IdentityId,
        target: IdentityId,
        decision: SwipeDecision,
        at: i64,
    ) -> Result<SwipeOutcome, CoreError> {
        self.ledger.record(actor, target, decision, at)?;
        match decision {
            SwipeDecision::Like => Ok(self.resolver.resolve_like(actor, target, at)),
            SwipeDecision::Pass => Ok(SwipeOutcome::unmatched()),
        }
    }

    /// Every match the identity participates in.
    pub fn list_matches(&self, identity: IdentityId) -> Vec<MatchSummary> {
        self.registry.list_for(identity)
    }

    /// Channel history, ascending by sequence.
    pub fn history(&self, requester: IdentityId, match_id: MatchId) -> Result<Vec<Message>, CoreError> {
        self.broker.history(match_id, requester)
    }

    /// Persist a message to a match's channel and fan it out.
    pub fn send_message(
        &self,
        sender: IdentityId,
        match_id: MatchId,
        content: String,
        at: i64,
    ) -> Result<Message, CoreError> {
        self.broker.append(match_id, sender, content, at)
    }

    /// Filter a directory roster down to swipeable candidates: never the
    /// identity itself, never a target it has already decided on.
    pub fn candidates(&self, identity: IdentityId, roster: &[IdentityId]) -> Vec<IdentityId> {
        let decided = self.ledger.decided_targets(identity);
        roster
            .iter()
            .copied()
            .filter(|id| *id != identity && !decided.contains(id))
            .collect()
    }

    /// Register a live connection for the identity.
    pub fn connect(&self, identity: IdentityId, tx: UnboundedSender<LiveEvent>) -> ConnectionId {
        self.presence.register(identity, tx)
    }

    /// Tear down a live connection. Idempotent.
    pub fn disconnect(&self, connection: ConnectionId) {
        self.presence.unregister(connection);
    }
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::new()
    }
}
