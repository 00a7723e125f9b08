//! Wire protocol
//!
//! Defines the JSON messages exchanged with clients over the WebSocket.

mod messages;

pub use messages::{ClientRequest, ParseError, ServerEvent};
