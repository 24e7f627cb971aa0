use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDetailDto, ArticleVotesDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId, ArticleReadRepository},
        category::CategoryRepository,
        vote::HelpfulVoteRepository,
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) vote_repo: Arc<dyn HelpfulVoteRepository>,
    pub(super) search_limit: u32,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        vote_repo: Arc<dyn HelpfulVoteRepository>,
        search_limit: u32,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
            vote_repo,
            search_limit,
        }
    }

    pub(super) async fn load_article(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    pub(super) async fn with_relations(&self, article: Article) -> ApplicationResult<ArticleDetailDto> {
        let categories = self.category_repo.list_for_article(article.id).await?;
        let votes = self.vote_repo.list_for_article(article.id).await?;
        let ArticleVotesDto { votes, tally } = ArticleVotesDto::from_votes(votes);

        Ok(ArticleDetailDto {
            article: article.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            votes,
            vote_tally: tally,
        })
    }
}
