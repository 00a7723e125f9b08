//! POST_COMMENT handler

use std::sync::Arc;

use newsroom_core::NewComment;

use crate::connection::Connection;
use crate::protocol::ServerEvent;
use crate::server::GatewayState;

use super::HandlerResult;

/// Handles comment posting
pub struct PostCommentHandler;

impl PostCommentHandler {
    /// Persist the comment, then fan it out to every session
    pub async fn handle(
        state: &GatewayState,
        connection: &Arc<Connection>,
        article_id: i64,
        draft: NewComment,
    ) -> HandlerResult<()> {
        let comment = state.comments().create(article_id, &draft).await?;

        tracing::info!(
            session_id = %connection.session_id(),
            article_id = article_id,
            comment_id = comment.id,
            "Comment posted"
        );

        let event = ServerEvent::NewComment {
            article_id,
            comment,
        };
        state.connection_manager().broadcast(&event);

        Ok(())
    }
}
