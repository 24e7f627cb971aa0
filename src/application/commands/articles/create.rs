// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{
        ArticleContent, ArticleName, ArticleStatus, AuthorId, DEFAULT_ARTICLE_ORDER, NewArticle,
    },
};

pub struct CreateArticleCommand {
    pub name: String,
    pub content: String,
    pub author_id: i64,
    pub order: Option<i32>,
    pub featured: Option<bool>,
    pub status: Option<String>,
    pub category_ids: Vec<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    name: Option<String>,
    content: Option<String>,
    author_id: Option<i64>,
    order: Option<i32>,
    featured: Option<bool>,
    status: Option<String>,
    category_ids: Vec<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn category_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.category_ids = ids.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            name: self.name.ok_or("name is required")?,
            content: self.content.ok_or("content is required")?,
            author_id: self.author_id.ok_or("author_id is required")?,
            order: self.order,
            featured: self.featured,
            status: self.status,
            category_ids: self.category_ids,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let name = ArticleName::new(command.name)?;
        let content = ArticleContent::new(command.content)?;
        let author_id = AuthorId::new(command.author_id)?;
        let status = command
            .status
            .as_deref()
            .map(str::parse::<ArticleStatus>)
            .transpose()?
            .unwrap_or_default();

        let slug = self.slug_service.derive_unique_slug(&name, None).await?;
        let category_ids = self.resolve_categories(&command.category_ids).await?;
        let now = self.clock.now();

        let new_article = NewArticle {
            name,
            slug,
            content,
            author_id,
            order: command.order.unwrap_or(DEFAULT_ARTICLE_ORDER),
            featured: command.featured.unwrap_or(false),
            status,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article, &category_ids).await?;

        tracing::info!(article_id = %created.id, status = %created.status(), "article created");
        Ok(created.into())
    }
}
