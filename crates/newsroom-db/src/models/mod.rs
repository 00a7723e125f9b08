//! Database row models
//!
//! Each model mirrors one table and converts into its domain entity via
//! `From`. Aggregate assembly (attaching comments and reactions to
//! articles) happens in the repositories.

mod article;
mod category;
mod comment;
mod reaction;

pub use article::ArticleModel;
pub use category::CategoryModel;
pub use comment::CommentModel;
pub use reaction::ReactionModel;
