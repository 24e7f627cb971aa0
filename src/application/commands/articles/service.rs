// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::ClockPort,
    },
    domain::{
        article::{
            Article, ArticleId, ArticleReadRepository, ArticleWriteRepository,
            services::ArticleSlugService,
        },
        category::{CategoryId, CategoryRepository},
        vote::HelpfulVoteRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) vote_repo: Arc<dyn HelpfulVoteRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<ClockPort>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        vote_repo: Arc<dyn HelpfulVoteRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            vote_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn load_article(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// Validate category ids and make sure every one of them exists.
    pub(super) async fn resolve_categories(
        &self,
        raw_ids: &[i64],
    ) -> ApplicationResult<Vec<CategoryId>> {
        let mut ids = raw_ids
            .iter()
            .map(|id| CategoryId::new(*id))
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(ids);
        }

        let found = self.category_repo.find_many(&ids).await?;
        if found.len() != ids.len() {
            let missing: Vec<String> = ids
                .iter()
                .filter(|id| !found.iter().any(|category| category.id == **id))
                .map(|id| id.0.to_string())
                .collect();
            return Err(ApplicationError::not_found(format!(
                "unknown category ids: {}",
                missing.join(", ")
            )));
        }

        Ok(ids)
    }
}
