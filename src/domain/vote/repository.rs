use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::vote::entity::{HelpfulVote, NewHelpfulVote};
use async_trait::async_trait;

#[async_trait]
pub trait HelpfulVoteRepository: Send + Sync {
    async fn record(&self, vote: NewHelpfulVote) -> DomainResult<HelpfulVote>;
    /// Votes for an article, oldest first.
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<HelpfulVote>>;
}
