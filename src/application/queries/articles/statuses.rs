use super::ArticleQueryService;
use crate::{
    application::{dto::TransitionOptionsDto, error::ApplicationResult},
    domain::article::{ArticleId, ArticleStatus},
};

pub struct TransitionOptionsQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Every status an article can hold, in workflow order.
    pub fn statuses(&self) -> Vec<ArticleStatus> {
        ArticleStatus::ALL.to_vec()
    }

    pub async fn transition_options(
        &self,
        query: TransitionOptionsQuery,
    ) -> ApplicationResult<TransitionOptionsDto> {
        let id = ArticleId::new(query.id)?;
        let article = self.load_article(id).await?;
        Ok(article.status().into())
    }
}
