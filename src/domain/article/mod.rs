pub mod entity;
pub mod listing;
pub mod repository;
pub mod services;
pub mod status;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle, StatusChange};
pub use listing::{ArticleListing, ArticleSort, ArticleSortKey, SortDirection};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use status::ArticleStatus;
pub use value_objects::{
    ArticleContent, ArticleId, ArticleName, ArticleSlug, AuthorId, DEFAULT_ARTICLE_ORDER,
};
