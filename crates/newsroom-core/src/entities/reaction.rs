//! Reaction entity - a typed endorsement left on an article

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reaction entity
///
/// At most one reaction exists per (article, client, type) triple; the
/// store enforces this with a uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub id: i64,
    pub article_id: i64,
    pub client_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Check if reaction is of a specific type
    #[inline]
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

/// Draft payload for recording a reaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReaction {
    pub client_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}
