//! GET_ALL_ARTICLES handler

use std::sync::Arc;

use crate::connection::Connection;
use crate::protocol::ServerEvent;
use crate::server::GatewayState;

use super::HandlerResult;

/// Handles full feed requests
pub struct GetArticlesHandler;

impl GetArticlesHandler {
    /// Load the feed and reply to the requesting session only
    pub async fn handle(state: &GatewayState, connection: &Arc<Connection>) -> HandlerResult<()> {
        let articles = state.articles().list().await?;

        tracing::debug!(
            session_id = %connection.session_id(),
            count = articles.len(),
            "Article feed requested"
        );

        let event = ServerEvent::AllArticles { articles };
        if let Ok(frame) = event.to_json() {
            if connection.send(frame).await.is_err() {
                tracing::warn!(
                    session_id = %connection.session_id(),
                    "Failed to deliver article feed"
                );
            }
        }

        Ok(())
    }
}
