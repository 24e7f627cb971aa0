use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::vote::{HelpfulVote, HelpfulVoteRepository, NewHelpfulVote};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteHelpfulVoteRepository {
    pool: SqlitePool,
}

impl SqliteHelpfulVoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VoteRow {
    id: i64,
    article_id: i64,
    helpful: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<VoteRow> for HelpfulVote {
    type Error = DomainError;

    fn try_from(row: VoteRow) -> Result<Self, Self::Error> {
        Ok(HelpfulVote {
            id: row.id,
            article_id: ArticleId::new(row.article_id)?,
            helpful: row.helpful,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl HelpfulVoteRepository for SqliteHelpfulVoteRepository {
    async fn record(&self, vote: NewHelpfulVote) -> DomainResult<HelpfulVote> {
        let row = sqlx::query_as::<_, VoteRow>(
            "INSERT INTO helpful_votes (article_id, helpful, created_at) VALUES (?, ?, ?)
             RETURNING id, article_id, helpful, created_at",
        )
        .bind(i64::from(vote.article_id))
        .bind(vote.helpful)
        .bind(vote.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        HelpfulVote::try_from(row)
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<HelpfulVote>> {
        let rows = sqlx::query_as::<_, VoteRow>(
            "SELECT id, article_id, helpful, created_at FROM helpful_votes
             WHERE article_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(HelpfulVote::try_from).collect()
    }
}
