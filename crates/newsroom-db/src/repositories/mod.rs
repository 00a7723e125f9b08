//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! newsroom-core. Each repository handles database operations for a
//! specific domain entity.

mod article;
mod category;
mod comment;
mod error;
mod reaction;

pub use article::PgArticleRepository;
pub use category::PgCategoryRepository;
pub use comment::PgCommentRepository;
pub use reaction::PgReactionRepository;
