//! Presence router
//!
//! Maps an identity to its set of currently live connections. An identity may
//! hold zero or many connections at once. The router is the sole owner and
//! mutator of that mapping: connections are created on authenticated
//! handshake and destroyed on disconnect or on the first failed send.
//!
//! Delivery is fire-and-forget. Events go out over unbounded senders, so a
//! slow or dead connection never stalls the caller that raised the event;
//! with no live connections the event is silently dropped. Persisted state is
//! the durability guarantee, the live event is a notification hint only.

use crate::events::LiveEvent;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc::UnboundedSender;
use types::ids::{ConnectionId, IdentityId};

/// One live connection's send half
struct ConnectionHandle {
    id: ConnectionId,
    tx: UnboundedSender<LiveEvent>,
}

/// Identity -> live connection set, with best-effort fanout
pub struct PresenceRouter {
    next_connection: AtomicU64,
    /// Identity -> its live connections
    links: DashMap<IdentityId, Vec<ConnectionHandle>>,
    /// Connection -> owning identity, for teardown by connection id
    owners: DashMap<ConnectionId, IdentityId>,
}

impl PresenceRouter {
    pub fn new() -> Self {
        Self {
            next_connection: AtomicU64::new(1),
            links: DashMap::new(),
            owners: DashMap::new(),
        }
    }

    /// Register a live connection for the identity and return its id.
    pub fn register(&self, identity: IdentityId, tx: UnboundedSender<LiveEvent>) -> ConnectionId {
        let id = ConnectionId::from_u64(self.next_connection.fetch_add(1, Ordering::Relaxed));
        self.owners.insert(id, identity);
        self.links
            .entry(identity)
            .or_default()
            .push(ConnectionHandle { id, tx });
        tracing::info!(connection = %id, identity = %identity, "connection registered");
        id
    }

    /// Remove a connection. No-op if it is already gone.
    pub fn unregister(&self, connection: ConnectionId) {
        let Some((_, identity)) = self.owners.remove(&connection) else {
            return;
        };
        if let Some(mut handles) = self.links.get_mut(&identity) {
            handles.retain(|h| h.id != connection);
        }
        tracing::info!(connection = %connection, identity = %identity, "connection unregistered");
    }

    /// Send the event to every live connection of the identity.
    ///
    /// Connections whose receiving half is gone are pruned here rather than
    /// retried. Zero live connections means the event is dropped.
    pub fn deliver(&self, identity: IdentityId, event: LiveEvent) {
        let dead: Vec<ConnectionId> = {
            let Some(mut handles) = self.links.get_mut(&identity) else {
                tracing::debug!(identity = %identity, "no live connections, event dropped");
                return;
            };
            let mut dead = Vec::new();
            handles.retain(|h| {
                if h.tx.send(event.clone()).is_ok() {
                    true
                } else {
                    dead.push(h.id);
                    false
                }
            });
            dead
        };
        for id in dead {
            self.owners.remove(&id);
            tracing::debug!(connection = %id, identity = %identity, "dead connection pruned");
        }
    }

    /// Number of live connections for the identity.
    pub fn connection_count(&self, identity: IdentityId) -> usize {
        self.links.get(&identity).map(|h| h.len()).unwrap_or(0)
    }
}

impl Default for PresenceRouter {
    fn default() -> Self {
        Self::new()
    }
}
