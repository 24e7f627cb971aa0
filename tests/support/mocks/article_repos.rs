// tests/support/mocks/article_repos.rs
use knowledge_base::domain::article::{
    Article, ArticleStatus, ArticleUpdate, ArticleWriteRepository, NewArticle, StatusChange,
};
use knowledge_base::domain::category::CategoryId;
use knowledge_base::domain::errors::DomainResult;
use knowledge_base::infrastructure::repositories::SqliteArticleWriteRepository;

/// 状態遷移の直前に別リクエストが先に遷移させた状況を再現する書き込みリポジトリ。
///
/// `apply_transition` は最初に `interloper` への遷移を実DBに書き込み、
/// その後で本来の変更を委譲する。
pub struct RacingTransitionRepo {
    inner: SqliteArticleWriteRepository,
    interloper: ArticleStatus,
}

impl RacingTransitionRepo {
    pub fn new(inner: SqliteArticleWriteRepository, interloper: ArticleStatus) -> Self {
        Self { inner, interloper }
    }
}

#[async_trait::async_trait]
impl ArticleWriteRepository for RacingTransitionRepo {
    async fn insert(&self, article: NewArticle, categories: &[CategoryId]) -> DomainResult<Article> {
        self.inner.insert(article, categories).await
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.inner.update(update).await
    }

    async fn apply_transition(&self, change: &StatusChange) -> DomainResult<Article> {
        let competing = StatusChange {
            article_id: change.article_id,
            from: change.from,
            to: self.interloper,
            changed_at: change.changed_at,
        };
        self.inner.apply_transition(&competing).await?;
        self.inner.apply_transition(change).await
    }
}
