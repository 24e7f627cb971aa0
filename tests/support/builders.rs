// tests/support/builders.rs
use knowledge_base::application::commands::articles::CreateArticleCommand;
use knowledge_base::domain::article::*;

use super::mocks::fixed_now;

/// 作成コマンドの既定値（本文と著者は固定）
pub fn create_command(name: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .name(name)
        .content(format!("{name} content"))
        .author_id(1)
        .build()
        .unwrap()
}

pub struct ArticleBuilder {
    id: i64,
    name: String,
    content: String,
    order: i32,
    featured: bool,
    status: ArticleStatus,
    author_id: i64,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "Test Article".into(),
            content: "Test content".into(),
            order: DEFAULT_ARTICLE_ORDER,
            featured: false,
            status: ArticleStatus::Draft,
            author_id: 1,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn build(self) -> Article {
        let slug = slug::slugify(&self.name);
        Article::restore(
            ArticleId::new(self.id).unwrap(),
            1,
            NewArticle {
                name: ArticleName::new(self.name).unwrap(),
                slug: ArticleSlug::new(slug).unwrap(),
                content: ArticleContent::new(self.content).unwrap(),
                author_id: AuthorId::new(self.author_id).unwrap(),
                order: self.order,
                featured: self.featured,
                status: self.status,
                created_at: fixed_now(),
                updated_at: fixed_now(),
            },
        )
    }
}
