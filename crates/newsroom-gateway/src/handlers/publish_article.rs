//! PUBLISH_ARTICLE handler

use std::sync::Arc;

use newsroom_core::NewArticle;

use crate::connection::Connection;
use crate::protocol::ServerEvent;
use crate::server::GatewayState;

use super::HandlerResult;

/// Handles article publication
pub struct PublishArticleHandler;

impl PublishArticleHandler {
    /// Persist the draft, then fan the stored article out to every session
    ///
    /// The broadcast carries the canonical record (id and timestamp
    /// assigned by the store), and the sender learns of its own write
    /// through the same broadcast as everyone else.
    pub async fn handle(
        state: &GatewayState,
        connection: &Arc<Connection>,
        draft: NewArticle,
    ) -> HandlerResult<()> {
        let article = state.articles().create(&draft).await?;

        tracing::info!(
            session_id = %connection.session_id(),
            article_id = article.id,
            "Article published"
        );

        let event = ServerEvent::NewArticle { article };
        state.connection_manager().broadcast(&event);

        Ok(())
    }
}
