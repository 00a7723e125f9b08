//! Request handlers
//!
//! Dispatches parsed client requests to the per-operation handlers.
//! Every handler persists first and broadcasts second; failures are
//! returned to the caller, which replies to the sender alone.

mod error;
mod get_articles;
mod post_comment;
mod post_reaction;
mod publish_article;

pub use error::{HandlerError, HandlerResult};
pub use get_articles::GetArticlesHandler;
pub use post_comment::PostCommentHandler;
pub use post_reaction::PostReactionHandler;
pub use publish_article::PublishArticleHandler;

use std::sync::Arc;

use crate::connection::Connection;
use crate::protocol::ClientRequest;
use crate::server::GatewayState;

/// Dispatch incoming client frames to the appropriate handler
pub struct MessageDispatcher;

impl MessageDispatcher {
    /// Parse a text frame and run the matching handler
    ///
    /// Any error escaping here is converted to an ERROR event by the
    /// session loop; it never closes the connection.
    pub async fn dispatch(
        state: &GatewayState,
        connection: &Arc<Connection>,
        text: &str,
    ) -> HandlerResult<()> {
        let request = ClientRequest::parse(text)?;

        tracing::trace!(
            session_id = %connection.session_id(),
            request = request.kind(),
            "Request received"
        );

        match request {
            ClientRequest::PublishArticle { article } => {
                PublishArticleHandler::handle(state, connection, article).await
            }
            ClientRequest::PostComment {
                article_id,
                comment,
            } => PostCommentHandler::handle(state, connection, article_id, comment).await,
            ClientRequest::PostReaction {
                article_id,
                reaction,
            } => PostReactionHandler::handle(state, connection, article_id, reaction).await,
            ClientRequest::GetAllArticles => GetArticlesHandler::handle(state, connection).await,
        }
    }
}
