//! Comment entity - reader feedback attached to an article

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author name used when a comment arrives without one
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub article_id: i64,
    pub user_name: String,
    pub comment_text: String,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Check if the comment was posted anonymously
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.user_name == DEFAULT_AUTHOR
    }
}

/// Draft payload for posting a comment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub user_name: Option<String>,
    #[serde(default)]
    pub comment_text: String,
}

impl NewComment {
    /// Author name with the anonymous fallback applied
    pub fn author(&self) -> &str {
        match self.user_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => DEFAULT_AUTHOR,
        }
    }
}
