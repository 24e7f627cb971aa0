use crate::domain::article::{Article, ArticleStatus, StatusChange};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;
use super::{CategoryDto, HelpfulVoteDto, VoteTallyDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub content: String,
    pub author_id: i64,
    pub order: i32,
    pub featured: bool,
    pub status: ArticleStatus,
    /// Incremented on every stored change.
    pub version: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let status = article.status();
        let version = article.version();
        Self {
            id: article.id.into(),
            name: article.name.into_inner(),
            slug: article.slug.into_inner(),
            content: article.content.into_inner(),
            author_id: article.author_id.into(),
            order: article.order,
            featured: article.featured,
            status,
            version,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// An article together with its categories and helpful votes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub categories: Vec<CategoryDto>,
    pub votes: Vec<HelpfulVoteDto>,
    pub vote_tally: VoteTallyDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusChangeDto {
    pub from: ArticleStatus,
    pub to: ArticleStatus,
    #[serde(with = "serde_time")]
    pub changed_at: DateTime<Utc>,
}

impl From<StatusChange> for StatusChangeDto {
    fn from(change: StatusChange) -> Self {
        Self {
            from: change.from,
            to: change.to,
            changed_at: change.changed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransitionOptionsDto {
    pub status: ArticleStatus,
    pub allowed: Vec<ArticleStatus>,
}

impl From<ArticleStatus> for TransitionOptionsDto {
    fn from(status: ArticleStatus) -> Self {
        Self {
            status,
            allowed: status.allowed_transitions().to_vec(),
        }
    }
}
