//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use newsroom_core::entities::{Comment, NewComment};
use newsroom_core::traits::{CommentRepository, RepoResult};
use newsroom_core::DomainError;

use crate::models::CommentModel;

use super::error::map_fk_violation;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    /// Insert a comment and return the stored row
    ///
    /// The article must exist; the foreign key enforces it, so there is
    /// no read-then-write race.
    #[instrument(skip(self))]
    async fn create(&self, article_id: i64, draft: &NewComment) -> RepoResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (article_id, user_name, comment_text)
            VALUES ($1, $2, $3)
            RETURNING id, article_id, user_name, comment_text, created_at
            "#,
        )
        .bind(article_id)
        .bind(draft.author())
        .bind(&draft.comment_text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::ArticleNotFound(article_id)))?;

        Ok(model.into())
    }
}
