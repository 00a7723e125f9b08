//! # newsroom-gateway
//!
//! WebSocket gateway for the realtime newsroom: wire protocol, broadcast
//! fan-out, and the per-connection session loop.

pub mod connection;
pub mod handlers;
pub mod protocol;
pub mod server;

pub use server::{create_app, run, GatewayState, DEFAULT_CATEGORIES};
