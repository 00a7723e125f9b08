//! Article entity - a published story with its comments and reactions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{Category, Comment, Reaction};

/// Article aggregate as served to clients
///
/// Carries its full comment and reaction collections plus the resolved
/// category, so a single record is enough to render the article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub category_id: Option<i64>,
    pub category: Option<Category>,
    pub comments: Vec<Comment>,
    pub reactions: Vec<Reaction>,
}

impl Article {
    /// Check if the article is filed under a category
    #[inline]
    pub fn is_categorized(&self) -> bool {
        self.category_id.is_some()
    }

    /// Count reactions of a given type
    pub fn reaction_count(&self, kind: &str) -> usize {
        self.reactions.iter().filter(|r| r.is_kind(kind)).count()
    }
}

/// Draft payload for publishing a new article
///
/// Missing `title`/`content` deserialize to empty strings so that both
/// "absent" and "blank" fail validation the same way.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    #[serde(default)]
    #[validate(length(min = 1, message = "Article title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Article content is required"))]
    pub content: String,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
}
