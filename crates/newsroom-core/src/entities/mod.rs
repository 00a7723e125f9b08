//! Domain entities - articles, categories, comments, and reactions

mod article;
mod category;
mod comment;
mod reaction;

pub use article::{Article, NewArticle};
pub use category::Category;
pub use comment::{Comment, NewComment, DEFAULT_AUTHOR};
pub use reaction::{NewReaction, Reaction};
