use crate::domain::article::status::ArticleStatus;
use crate::domain::errors::{DomainError, DomainResult};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortKey {
    #[default]
    Order,
    Name,
    CreatedAt,
}

impl ArticleSortKey {
    pub fn column(&self) -> &'static str {
        match self {
            ArticleSortKey::Order => "\"order\"",
            ArticleSortKey::Name => "name",
            ArticleSortKey::CreatedAt => "created_at",
        }
    }
}

impl FromStr for ArticleSortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order" => Ok(ArticleSortKey::Order),
            "name" => Ok(ArticleSortKey::Name),
            "created_at" => Ok(ArticleSortKey::CreatedAt),
            other => Err(DomainError::Validation(format!(
                "unsupported sort key '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(DomainError::Validation(format!(
                "unsupported sort direction '{other}'"
            ))),
        }
    }
}

/// Sort applied to article listings. Defaults to `order` ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticleSort {
    pub key: ArticleSortKey,
    pub direction: SortDirection,
}

impl ArticleSort {
    pub fn new(key: ArticleSortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// Filter, sort and window for listing articles.
#[derive(Debug, Clone)]
pub struct ArticleListing {
    pub status: Option<ArticleStatus>,
    pub featured: Option<bool>,
    pub sort: ArticleSort,
    pub limit: u32,
    pub offset: u32,
}

impl ArticleListing {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;
}

impl Default for ArticleListing {
    fn default() -> Self {
        Self {
            status: None,
            featured: None,
            sort: ArticleSort::default(),
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
