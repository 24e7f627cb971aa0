use super::ArticleQueryService;
use crate::{
    application::{dto::StatusChangeDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct StatusHistoryQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn status_history(
        &self,
        query: StatusHistoryQuery,
    ) -> ApplicationResult<Vec<StatusChangeDto>> {
        let id = ArticleId::new(query.id)?;
        self.load_article(id).await?;

        let changes = self.read_repo.status_history(id).await?;
        Ok(changes.into_iter().map(Into::into).collect())
    }
}
