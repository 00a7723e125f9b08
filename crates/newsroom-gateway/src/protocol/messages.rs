//! Wire message formats
//!
//! Every frame is a single JSON object with a `type` discriminator string.
//! Requests flow client to server, events flow server to client; payload
//! fields are camelCase.

use newsroom_core::{Article, Category, Comment, NewArticle, NewComment, NewReaction, Reaction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request types the gateway accepts
const KNOWN_REQUEST_TYPES: &[&str] = &[
    "PUBLISH_ARTICLE",
    "POST_COMMENT",
    "POST_REACTION",
    "GET_ALL_ARTICLES",
];

/// Error produced when an inbound frame cannot be understood
#[derive(Debug, Error)]
pub enum ParseError {
    /// Frame is not a JSON object carrying a string `type` field
    #[error("Invalid message format")]
    Malformed,

    /// `type` is none of the known request types
    #[error("Unknown message type: {0}")]
    UnknownType(String),

    /// Known `type` whose payload does not match the expected shape
    #[error("Invalid {0} payload")]
    InvalidPayload(String),
}

/// Inbound client request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientRequest {
    /// Publish a new article
    PublishArticle { article: NewArticle },

    /// Comment on an existing article
    #[serde(rename_all = "camelCase")]
    PostComment { article_id: i64, comment: NewComment },

    /// React to an existing article
    #[serde(rename_all = "camelCase")]
    PostReaction {
        article_id: i64,
        reaction: NewReaction,
    },

    /// Request the full article feed
    GetAllArticles,
}

impl ClientRequest {
    /// Parse a text frame
    ///
    /// An unknown `type` is reported separately from a recognized type
    /// with a bad payload, so the two produce different ERROR replies.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|_| ParseError::Malformed)?;

        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or(ParseError::Malformed)?
            .to_owned();

        if !KNOWN_REQUEST_TYPES.contains(&kind.as_str()) {
            return Err(ParseError::UnknownType(kind));
        }

        serde_json::from_value(value).map_err(|_| ParseError::InvalidPayload(kind))
    }

    /// The request's `type` discriminator
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PublishArticle { .. } => "PUBLISH_ARTICLE",
            Self::PostComment { .. } => "POST_COMMENT",
            Self::PostReaction { .. } => "POST_REACTION",
            Self::GetAllArticles => "GET_ALL_ARTICLES",
        }
    }
}

/// Outbound server event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerEvent {
    /// Snapshot of the current feed, sent once right after connect
    InitialData {
        articles: Vec<Article>,
        categories: Vec<Category>,
    },

    /// Reply to GET_ALL_ARTICLES, sent to the requester only
    AllArticles { articles: Vec<Article> },

    /// A new article was published
    NewArticle { article: Article },

    /// A comment was added to an article
    #[serde(rename_all = "camelCase")]
    NewComment { article_id: i64, comment: Comment },

    /// A reaction was added to an article
    #[serde(rename_all = "camelCase")]
    NewReaction { article_id: i64, reaction: Reaction },

    /// A request failed; sent only to the offending session
    Error { message: String },
}

impl ServerEvent {
    /// Create an Error event
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// The event's `type` discriminator
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InitialData { .. } => "INITIAL_DATA",
            Self::AllArticles { .. } => "ALL_ARTICLES",
            Self::NewArticle { .. } => "NEW_ARTICLE",
            Self::NewComment { .. } => "NEW_COMMENT",
            Self::NewReaction { .. } => "NEW_REACTION",
            Self::Error { .. } => "ERROR",
        }
    }

    /// Serialize to a JSON frame
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for ServerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
