//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use newsroom_core::entities::{NewReaction, Reaction};
use newsroom_core::traits::{ReactionRepository, RepoResult};
use newsroom_core::DomainError;

use crate::models::ReactionModel;

use super::error::map_constraint_violation;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    /// Insert a reaction and return the stored row
    ///
    /// A plain INSERT lets the UNIQUE (article_id, client_id, kind)
    /// constraint reject repeats, so concurrent duplicates resolve to
    /// exactly one stored row.
    #[instrument(skip(self))]
    async fn create(&self, article_id: i64, draft: &NewReaction) -> RepoResult<Reaction> {
        let model = sqlx::query_as::<_, ReactionModel>(
            r#"
            INSERT INTO reactions (article_id, client_id, kind)
            VALUES ($1, $2, $3)
            RETURNING id, article_id, client_id, kind, created_at
            "#,
        )
        .bind(article_id)
        .bind(&draft.client_id)
        .bind(&draft.kind)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(
                e,
                || DomainError::DuplicateReaction,
                || DomainError::ArticleNotFound(article_id),
            )
        })?;

        Ok(model.into())
    }
}
