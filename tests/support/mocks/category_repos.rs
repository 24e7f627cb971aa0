// tests/support/mocks/category_repos.rs
use knowledge_base::domain::article::ArticleId;
use knowledge_base::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory,
};
use knowledge_base::domain::errors::DomainResult;
use knowledge_base::infrastructure::repositories::SqliteCategoryRepository;

use super::time::fixed_now;

/// `find_many` が要求された ID をすべて存在するものとして返すカテゴリリポジトリ。
///
/// 存在確認の後にカテゴリが消えた状況を再現する。記事の保存時に
/// `article_category` の外部キー制約で失敗する。その他の操作は実DBに委譲する。
pub struct VanishingCategoryRepo {
    inner: SqliteCategoryRepository,
}

impl VanishingCategoryRepo {
    pub fn new(inner: SqliteCategoryRepository) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl CategoryRepository for VanishingCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        self.inner.insert(category).await
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        self.inner.list().await
    }

    async fn find_many(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        ids.iter()
            .map(|id| {
                Ok(Category {
                    id: *id,
                    name: CategoryName::new(format!("Category {}", id.0))?,
                    slug: CategorySlug::new(format!("category-{}", id.0))?,
                    created_at: fixed_now(),
                })
            })
            .collect()
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Category>> {
        self.inner.list_for_article(article_id).await
    }

    async fn sync_article(&self, article_id: ArticleId, ids: &[CategoryId]) -> DomainResult<()> {
        self.inner.sync_article(article_id, ids).await
    }
}
