//! Category entity - a named grouping for articles

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// Create a new Category
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}
