use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub const SEARCH_TERM_MAX_LEN: usize = 255;

pub struct SearchArticlesQuery {
    pub s: Option<String>,
}

impl ArticleQueryService {
    /// Search published articles by name or content.
    ///
    /// Drafts, hidden and archived articles never appear in the results.
    pub async fn search_articles(&self, query: SearchArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let term = Self::validate_term(query.s.as_deref())?;

        let records = self
            .read_repo
            .search_published(term, self.search_limit)
            .await?;

        tracing::debug!(term_len = term.len(), hits = records.len(), "article search");
        Ok(records.into_iter().map(Into::into).collect())
    }

    fn validate_term(raw: Option<&str>) -> ApplicationResult<&str> {
        let term = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApplicationError::validation("the s field is required"))?;

        if term.chars().count() > SEARCH_TERM_MAX_LEN {
            return Err(ApplicationError::validation(format!(
                "the s field may not be greater than {SEARCH_TERM_MAX_LEN} characters"
            )));
        }

        Ok(term)
    }
}
