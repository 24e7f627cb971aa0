use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle, StatusChange};
use crate::domain::article::listing::ArticleListing;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Store the article together with its category links. Either both land or neither does.
    async fn insert(&self, article: NewArticle, categories: &[CategoryId]) -> DomainResult<Article>;
    /// Apply field changes only if the stored row is still at `update.expected_version`.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Persist a status change only if the stored status still equals `change.from`.
    async fn apply_transition(&self, change: &StatusChange) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Returns the requested window plus whether more rows follow it.
    async fn list(&self, listing: &ArticleListing) -> DomainResult<(Vec<Article>, bool)>;
    /// Published articles whose name or content contains `term`.
    async fn search_published(&self, term: &str, limit: u32) -> DomainResult<Vec<Article>>;
    async fn status_history(&self, id: ArticleId) -> DomainResult<Vec<StatusChange>>;
}
