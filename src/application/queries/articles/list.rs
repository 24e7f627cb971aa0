use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::ApplicationResult,
    },
    domain::article::{ArticleListing, ArticleSort, ArticleSortKey, ArticleStatus, SortDirection},
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Page<ArticleDto>> {
        let listing = Self::normalize_listing(query)?;

        let (records, has_more) = self.read_repo.list(&listing).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, listing.limit, listing.offset, has_more))
    }

    fn normalize_listing(query: ListArticlesQuery) -> ApplicationResult<ArticleListing> {
        let key = query
            .sort
            .as_deref()
            .map(str::parse::<ArticleSortKey>)
            .transpose()?
            .unwrap_or_default();
        let direction = query
            .direction
            .as_deref()
            .map(str::parse::<SortDirection>)
            .transpose()?
            .unwrap_or_default();
        let status = query
            .status
            .as_deref()
            .map(str::parse::<ArticleStatus>)
            .transpose()?;

        let limit = if query.limit == 0 {
            ArticleListing::DEFAULT_LIMIT
        } else {
            query.limit.min(ArticleListing::MAX_LIMIT)
        };

        Ok(ArticleListing {
            status,
            featured: query.featured,
            sort: ArticleSort::new(key, direction),
            limit,
            offset: query.offset,
        })
    }
}
