use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDetailDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = ArticleId::new(query.id)?;
        let article = self.load_article(id).await?;
        self.with_relations(article).await
    }
}
