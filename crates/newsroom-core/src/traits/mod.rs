//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    ArticleRepository, CategoryRepository, CommentRepository, ReactionRepository, RepoResult,
};
