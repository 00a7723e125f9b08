//! Gateway state
//!
//! Shared dependencies for the gateway server. Repositories are held
//! as trait objects so tests can inject in-memory implementations.

use std::sync::Arc;

use newsroom_core::{
    ArticleRepository, CategoryRepository, CommentRepository, ReactionRepository,
};

use crate::connection::ConnectionManager;

/// Gateway application state
#[derive(Clone)]
pub struct GatewayState {
    /// Article storage
    articles: Arc<dyn ArticleRepository>,
    /// Category storage
    categories: Arc<dyn CategoryRepository>,
    /// Comment storage
    comments: Arc<dyn CommentRepository>,
    /// Reaction storage
    reactions: Arc<dyn ReactionRepository>,
    /// Connection registry and broadcast fan-out
    connection_manager: Arc<ConnectionManager>,
}

impl GatewayState {
    /// Create a new gateway state
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        categories: Arc<dyn CategoryRepository>,
        comments: Arc<dyn CommentRepository>,
        reactions: Arc<dyn ReactionRepository>,
        connection_manager: Arc<ConnectionManager>,
    ) -> Self {
        Self {
            articles,
            categories,
            comments,
            reactions,
            connection_manager,
        }
    }

    /// Get the article repository
    pub fn articles(&self) -> &dyn ArticleRepository {
        self.articles.as_ref()
    }

    /// Get the category repository
    pub fn categories(&self) -> &dyn CategoryRepository {
        self.categories.as_ref()
    }

    /// Get the comment repository
    pub fn comments(&self) -> &dyn CommentRepository {
        self.comments.as_ref()
    }

    /// Get the reaction repository
    pub fn reactions(&self) -> &dyn ReactionRepository {
        self.reactions.as_ref()
    }

    /// Get the connection manager
    pub fn connection_manager(&self) -> &ConnectionManager {
        &self.connection_manager
    }
}

impl std::fmt::Debug for GatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayState")
            .field("connection_manager", &self.connection_manager)
            .finish()
    }
}
