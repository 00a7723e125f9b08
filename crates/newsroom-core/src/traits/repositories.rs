//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Timestamps and identifiers are assigned
//! by the store, never taken from the client.

use async_trait::async_trait;

use crate::entities::{Article, Category, Comment, NewArticle, NewComment, NewReaction, Reaction};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Article Repository
// ============================================================================

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// List all articles newest-first, each with its comments (oldest-first),
    /// reactions, and resolved category
    async fn list(&self) -> RepoResult<Vec<Article>>;

    /// Publish a new article and return the stored record with empty
    /// comment/reaction collections
    async fn create(&self, draft: &NewArticle) -> RepoResult<Article>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories
    async fn list(&self) -> RepoResult<Vec<Category>>;

    /// Insert each name only if absent; safe to call on every startup
    async fn ensure_defaults(&self, names: &[&str]) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Attach a comment to an article
    async fn create(&self, article_id: i64, draft: &NewComment) -> RepoResult<Comment>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Record a reaction; fails with `DuplicateReaction` when the
    /// (article, client, type) triple already exists
    async fn create(&self, article_id: i64, draft: &NewReaction) -> RepoResult<Reaction>;
}
