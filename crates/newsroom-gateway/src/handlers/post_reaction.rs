//! POST_REACTION handler

use std::sync::Arc;

use newsroom_core::NewReaction;

use crate::connection::Connection;
use crate::protocol::ServerEvent;
use crate::server::GatewayState;

use super::HandlerResult;

/// Handles reaction posting
pub struct PostReactionHandler;

impl PostReactionHandler {
    /// Persist the reaction, then fan it out to every session
    ///
    /// A duplicate (article, client, type) insert is rejected by the
    /// store and surfaces as an error reply to the sender alone; nothing
    /// is broadcast for it.
    pub async fn handle(
        state: &GatewayState,
        connection: &Arc<Connection>,
        article_id: i64,
        draft: NewReaction,
    ) -> HandlerResult<()> {
        let reaction = state.reactions().create(article_id, &draft).await?;

        tracing::info!(
            session_id = %connection.session_id(),
            article_id = article_id,
            reaction_kind = %reaction.kind,
            "Reaction posted"
        );

        let event = ServerEvent::NewReaction {
            article_id,
            reaction,
        };
        state.connection_manager().broadcast(&event);

        Ok(())
    }
}
