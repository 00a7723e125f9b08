//! PostgreSQL implementation of ArticleRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use validator::Validate;

use newsroom_core::entities::{Article, Comment, NewArticle, Reaction};
use newsroom_core::traits::{ArticleRepository, RepoResult};
use newsroom_core::DomainError;

use crate::models::{ArticleModel, CommentModel, ReactionModel};

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of ArticleRepository
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    /// Create a new PgArticleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    /// Load every article, newest first, with comments and reactions
    /// attached.
    ///
    /// Three fixed queries instead of one query per article keeps the
    /// snapshot cost flat as the feed grows.
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Article>> {
        let articles = sqlx::query_as::<_, ArticleModel>(
            r#"
            SELECT a.id, a.title, a.content, a.image_url, a.created_at, a.category_id,
                   c.name AS category_name
            FROM articles a
            LEFT JOIN categories c ON c.id = a.category_id
            ORDER BY a.created_at DESC, a.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let comments = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, article_id, user_name, comment_text, created_at
            FROM comments
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let reactions = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, article_id, client_id, kind, created_at
            FROM reactions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut comments_by_article: HashMap<i64, Vec<Comment>> = HashMap::new();
        for comment in comments {
            comments_by_article
                .entry(comment.article_id)
                .or_default()
                .push(comment.into());
        }

        let mut reactions_by_article: HashMap<i64, Vec<Reaction>> = HashMap::new();
        for reaction in reactions {
            reactions_by_article
                .entry(reaction.article_id)
                .or_default()
                .push(reaction.into());
        }

        Ok(articles
            .into_iter()
            .map(|model| {
                let mut article = Article::from(model);
                article.comments = comments_by_article.remove(&article.id).unwrap_or_default();
                article.reactions = reactions_by_article.remove(&article.id).unwrap_or_default();
                article
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &NewArticle) -> RepoResult<Article> {
        draft.validate().map_err(DomainError::from)?;

        let model = sqlx::query_as::<_, ArticleModel>(
            r#"
            WITH inserted AS (
                INSERT INTO articles (title, content, image_url, category_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, title, content, image_url, created_at, category_id
            )
            SELECT i.id, i.title, i.content, i.image_url, i.created_at, i.category_id,
                   c.name AS category_name
            FROM inserted i
            LEFT JOIN categories c ON c.id = i.category_id
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(&draft.image_url)
        .bind(draft.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match draft.category_id {
            Some(id) => map_fk_violation(e, || DomainError::CategoryNotFound(id)),
            None => map_db_error(e),
        })?;

        Ok(model.into())
    }
}
