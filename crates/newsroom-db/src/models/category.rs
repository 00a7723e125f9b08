//! Category row model

use newsroom_core::Category;
use sqlx::FromRow;

/// Row of the `categories` table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
}

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
        }
    }
}
