use crate::domain::article::ArticleId;
use crate::domain::category::entity::{Category, CategoryId, NewCategory};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
    async fn find_many(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>>;
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Category>>;
    /// Replace the categories attached to an article with exactly `ids`.
    async fn sync_article(&self, article_id: ArticleId, ids: &[CategoryId]) -> DomainResult<()>;
}
