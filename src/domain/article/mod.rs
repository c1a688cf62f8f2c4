pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;
pub mod workflow;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleBody, ArticleId, ArticleListCursor, ArticleSlug, ArticleStatus, ArticleTitle, ImageRef,
};
