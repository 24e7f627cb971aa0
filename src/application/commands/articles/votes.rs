use super::ArticleCommandService;
use crate::{
    application::{dto::HelpfulVoteDto, error::ApplicationResult},
    domain::{article::ArticleId, vote::NewHelpfulVote},
};

pub struct CastVoteCommand {
    pub article_id: i64,
    pub helpful: bool,
}

impl ArticleCommandService {
    pub async fn cast_vote(&self, command: CastVoteCommand) -> ApplicationResult<HelpfulVoteDto> {
        let article_id = ArticleId::new(command.article_id)?;
        self.load_article(article_id).await?;

        let vote = self
            .vote_repo
            .record(NewHelpfulVote {
                article_id,
                helpful: command.helpful,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::debug!(article_id = %article_id, helpful = vote.helpful, "helpful vote recorded");
        Ok(vote.into())
    }
}
