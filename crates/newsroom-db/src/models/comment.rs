//! Comment row model

use chrono::{DateTime, Utc};
use newsroom_core::Comment;
use sqlx::FromRow;

/// Row of the `comments` table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub article_id: i64,
    pub user_name: String,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            article_id: model.article_id,
            user_name: model.user_name,
            comment_text: model.comment_text,
            created_at: model.created_at,
        }
    }
}
