use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleVotesDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct ArticleVotesQuery {
    pub article_id: i64,
}

impl ArticleQueryService {
    pub async fn article_votes(&self, query: ArticleVotesQuery) -> ApplicationResult<ArticleVotesDto> {
        let id = ArticleId::new(query.article_id)?;
        self.load_article(id).await?;

        let votes = self.vote_repo.list_for_article(id).await?;
        Ok(ArticleVotesDto::from_votes(votes))
    }
}
