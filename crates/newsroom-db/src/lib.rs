//! # newsroom-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `newsroom-core`. It handles:
//!
//! - Connection pool management
//! - Schema bootstrap (idempotent `CREATE TABLE IF NOT EXISTS`)
//! - Database models with SQLx `FromRow` derives and entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use newsroom_db::{create_pool, ensure_schema, DatabaseConfig, PgArticleRepository};
//! use newsroom_core::ArticleRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::default();
//!     let pool = create_pool(&config).await?;
//!     ensure_schema(&pool).await?;
//!     let articles = PgArticleRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgArticleRepository, PgCategoryRepository, PgCommentRepository, PgReactionRepository,
};
pub use schema::ensure_schema;
