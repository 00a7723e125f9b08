//! # newsroom-core
//!
//! Domain layer containing entities, publish drafts, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Article, Category, Comment, NewArticle, NewComment, NewReaction, Reaction, DEFAULT_AUTHOR,
};
pub use error::DomainError;
pub use traits::{
    ArticleRepository, CategoryRepository, CommentRepository, ReactionRepository, RepoResult,
};
