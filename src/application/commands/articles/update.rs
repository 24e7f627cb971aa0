use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{Article, ArticleContent, ArticleId, ArticleName, ArticleUpdate},
};

/// Editable article fields. The status is changed through
/// [`ArticleCommandService::transition_article`] only.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub name: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
    pub featured: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self.load_article(id).await?;

        let UpdateArticleCommand {
            id: _,
            name,
            content,
            order,
            featured,
        } = command;

        let name = name.map(ArticleName::new).transpose()?;
        let content = content.map(ArticleContent::new).transpose()?;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, article.version(), now);
        update = self.apply_name_update(&mut article, name, update).await?;

        if let Some(content) = content {
            article.set_content(content.clone(), now);
            update = update.with_content(content);
        }
        if let Some(order) = order {
            article.set_order(order, now);
            update = update.with_order(order);
        }
        if let Some(featured) = featured {
            article.set_featured(featured, now);
            update = update.with_featured(featured);
        }

        if update.is_empty() {
            return Ok(article.into());
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    async fn apply_name_update(
        &self,
        article: &mut Article,
        name: Option<ArticleName>,
        update: ArticleUpdate,
    ) -> ApplicationResult<ArticleUpdate> {
        let Some(name) = name else {
            return Ok(update);
        };

        let slug = self
            .slug_service
            .derive_unique_slug(&name, Some(article.id))
            .await?;
        article.rename(name.clone(), slug.clone(), update.updated_at);
        Ok(update.with_name(name, slug))
    }
}
