//! Connection management
//!
//! Tracks live WebSocket connections and fans events out to them.

mod connection;
mod manager;

pub use connection::{Connection, ConnectionState};
pub use manager::ConnectionManager;
