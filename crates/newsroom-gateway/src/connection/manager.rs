//! Connection manager
//!
//! Manages all active WebSocket connections using DashMap for
//! thread-safe access, and implements the broadcast fan-out.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc;

use crate::protocol::ServerEvent;

use super::{Connection, ConnectionState};

/// Manages all active WebSocket connections
///
/// Uses `DashMap` for concurrent access to connection state.
pub struct ConnectionManager {
    /// Active connections by session ID
    connections: DashMap<String, Arc<Connection>>,
}

impl ConnectionManager {
    /// Create a new connection manager
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Create a new connection manager wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a new connection
    pub fn add_connection(
        &self,
        session_id: String,
        sender: mpsc::Sender<String>,
    ) -> Arc<Connection> {
        let connection = Connection::new(session_id.clone(), sender);
        self.connections.insert(session_id.clone(), connection.clone());

        tracing::debug!(session_id = %session_id, "Connection added");

        connection
    }

    /// Remove a connection
    ///
    /// Safe to call repeatedly; removing an unknown session is a no-op.
    pub async fn remove_connection(&self, session_id: &str) {
        if let Some((_, connection)) = self.connections.remove(session_id) {
            connection.set_state(ConnectionState::Closed).await;
            tracing::debug!(session_id = %session_id, "Connection removed");
        }
    }

    /// Get a connection by session ID
    pub fn get_connection(&self, session_id: &str) -> Option<Arc<Connection>> {
        self.connections.get(session_id).map(|r| r.clone())
    }

    /// Broadcast an event to all connections
    ///
    /// The event is serialized once; a closed or congested connection is
    /// skipped without interrupting delivery to the rest. Returns how
    /// many connections accepted the frame.
    pub fn broadcast(&self, event: &ServerEvent) -> usize {
        let frame = match event.to_json() {
            Ok(frame) => frame,
            Err(e) => {
                tracing::error!(event = %event, error = %e, "Failed to serialize event");
                return 0;
            }
        };

        let mut sent = 0;
        for entry in self.connections.iter() {
            if entry.try_send(frame.clone()).is_ok() {
                sent += 1;
            }
        }

        tracing::debug!(event = %event, sent = sent, "Event broadcast to all connections");

        sent
    }

    /// Send an event to a single connection
    ///
    /// Returns false if the session is unknown or its channel is gone.
    pub async fn send_to(&self, session_id: &str, event: &ServerEvent) -> bool {
        let Some(connection) = self.get_connection(session_id) else {
            return false;
        };

        let frame = match event.to_json() {
            Ok(frame) => frame,
            Err(e) => {
                tracing::error!(event = %event, error = %e, "Failed to serialize event");
                return false;
            }
        };

        connection.send(frame).await.is_ok()
    }

    /// Get the total number of active connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Check if a session exists
    pub fn has_session(&self, session_id: &str) -> bool {
        self.connections.contains_key(session_id)
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("connections", &self.connections.len())
            .finish()
    }
}
