//! Reaction row model

use chrono::{DateTime, Utc};
use newsroom_core::Reaction;
use sqlx::FromRow;

/// Row of the `reactions` table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub article_id: i64,
    pub client_id: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: model.id,
            article_id: model.article_id,
            client_id: model.client_id,
            kind: model.kind,
            created_at: model.created_at,
        }
    }
}
