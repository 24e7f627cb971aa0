use crate::domain::vote::{HelpfulVote, VoteTally};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HelpfulVoteDto {
    pub id: i64,
    pub helpful: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<HelpfulVote> for HelpfulVoteDto {
    fn from(vote: HelpfulVote) -> Self {
        Self {
            id: vote.id,
            helpful: vote.helpful,
            created_at: vote.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct VoteTallyDto {
    pub helpful: u64,
    pub not_helpful: u64,
    pub total: u64,
}

impl From<VoteTally> for VoteTallyDto {
    fn from(tally: VoteTally) -> Self {
        Self {
            helpful: tally.helpful,
            not_helpful: tally.not_helpful,
            total: tally.total(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleVotesDto {
    pub votes: Vec<HelpfulVoteDto>,
    pub tally: VoteTallyDto,
}

impl ArticleVotesDto {
    pub fn from_votes(votes: Vec<HelpfulVote>) -> Self {
        let tally = VoteTally::from_votes(&votes).into();
        Self {
            votes: votes.into_iter().map(Into::into).collect(),
            tally,
        }
    }
}
