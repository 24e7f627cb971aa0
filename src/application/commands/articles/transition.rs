use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleId, ArticleStatus},
        errors::DomainError,
    },
};

pub struct TransitionArticleCommand {
    pub id: i64,
    pub status: String,
}

impl ArticleCommandService {
    /// Move an article to another workflow status and persist it.
    ///
    /// The stored status is only replaced if it still matches the status the
    /// move was validated against; otherwise the call fails with a conflict
    /// and nothing is written.
    pub async fn transition_article(
        &self,
        command: TransitionArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self.load_article(id).await?;

        let target = command
            .status
            .parse::<ArticleStatus>()
            .map_err(|_| DomainError::invalid_transition(article.status(), command.status.as_str()))?;

        let change = article.transition_to(target, self.clock.now())?;

        let updated = match self.write_repo.apply_transition(&change).await {
            Ok(updated) => updated,
            Err(err) => {
                tracing::warn!(article_id = %id, from = %change.from, to = %change.to, error = %err, "status transition not applied");
                return Err(err.into());
            }
        };

        tracing::info!(article_id = %id, from = %change.from, to = %change.to, "article status changed");
        Ok(updated.into())
    }
}
