use super::ArticleCommandService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct AssignCategoriesCommand {
    pub article_id: i64,
    pub category_ids: Vec<i64>,
}

impl ArticleCommandService {
    pub async fn assign_categories(
        &self,
        command: AssignCategoriesCommand,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let article_id = ArticleId::new(command.article_id)?;
        self.load_article(article_id).await?;

        let ids = self.resolve_categories(&command.category_ids).await?;
        self.category_repo.sync_article(article_id, &ids).await?;

        let categories = self.category_repo.list_for_article(article_id).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
