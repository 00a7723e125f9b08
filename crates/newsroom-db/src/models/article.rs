//! Article row model

use chrono::{DateTime, Utc};
use newsroom_core::{Article, Category};
use sqlx::FromRow;

/// Row of the `articles` table joined with its optional category name
///
/// `category_name` comes from a LEFT JOIN on `categories`, so it is
/// `None` for uncategorized articles.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleModel {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
}

impl From<ArticleModel> for Article {
    /// Converts a row into an entity with empty comment and reaction
    /// lists. Repositories attach those from their own tables.
    fn from(model: ArticleModel) -> Self {
        let category = match (model.category_id, model.category_name) {
            (Some(id), Some(name)) => Some(Category { id, name }),
            _ => None,
        };

        Article {
            id: model.id,
            title: model.title,
            content: model.content,
            image_url: model.image_url,
            created_at: model.created_at,
            category_id: model.category_id,
            category,
            comments: Vec::new(),
            reactions: Vec::new(),
        }
    }
}
