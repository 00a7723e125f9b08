//! Individual WebSocket connection
//!
//! Represents a single WebSocket connection and its state. Outbound
//! frames are pre-serialized JSON strings; the send task owns the
//! socket sink.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{mpsc, RwLock};

/// Connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Transport established, snapshot not yet delivered
    Connecting,
    /// Snapshot delivered, requests accepted
    Active,
    /// Transport closed, no further events
    Closed,
}

/// A single WebSocket connection
pub struct Connection {
    /// Unique session ID
    session_id: String,

    /// Current connection state
    state: RwLock<ConnectionState>,

    /// Channel to the send task
    sender: mpsc::Sender<String>,

    /// Connection creation time
    created_at: Instant,
}

impl Connection {
    /// Create a new connection handle
    pub fn new(session_id: String, sender: mpsc::Sender<String>) -> Arc<Self> {
        Arc::new(Self {
            session_id,
            state: RwLock::new(ConnectionState::Connecting),
            sender,
            created_at: Instant::now(),
        })
    }

    /// Get the session ID
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Get the current state
    pub async fn state(&self) -> ConnectionState {
        *self.state.read().await
    }

    /// Set the connection state
    pub async fn set_state(&self, state: ConnectionState) {
        *self.state.write().await = state;
    }

    /// Check if the connection accepts requests
    pub async fn is_active(&self) -> bool {
        *self.state.read().await == ConnectionState::Active
    }

    /// Get connection age
    pub fn age(&self) -> std::time::Duration {
        self.created_at.elapsed()
    }

    /// Send a frame to this connection, waiting for channel capacity
    pub async fn send(&self, frame: String) -> Result<(), mpsc::error::SendError<String>> {
        self.sender.send(frame).await
    }

    /// Try to send a frame without waiting for channel capacity
    pub fn try_send(&self, frame: String) -> Result<(), mpsc::error::TrySendError<String>> {
        self.sender.try_send(frame)
    }

    /// Check if the sender channel is closed
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("session_id", &self.session_id)
            .field("created_at", &self.created_at)
            .finish()
    }
}
