use crate::domain::article::ArticleId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpfulVote {
    pub id: i64,
    pub article_id: ArticleId,
    pub helpful: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewHelpfulVote {
    pub article_id: ArticleId,
    pub helpful: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    pub helpful: u64,
    pub not_helpful: u64,
}

impl VoteTally {
    pub fn from_votes<'a>(votes: impl IntoIterator<Item = &'a HelpfulVote>) -> Self {
        votes.into_iter().fold(Self::default(), |mut tally, vote| {
            if vote.helpful {
                tally.helpful += 1;
            } else {
                tally.not_helpful += 1;
            }
            tally
        })
    }

    pub fn total(&self) -> u64 {
        self.helpful + self.not_helpful
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(id: i64, helpful: bool) -> HelpfulVote {
        HelpfulVote {
            id,
            article_id: ArticleId::new(1).unwrap(),
            helpful,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn tally_counts_each_side() {
        let votes = vec![vote(1, true), vote(2, false), vote(3, true)];
        let tally = VoteTally::from_votes(&votes);
        assert_eq!(tally.helpful, 2);
        assert_eq!(tally.not_helpful, 1);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn empty_tally_is_zero() {
        assert_eq!(VoteTally::from_votes(&Vec::<HelpfulVote>::new()).total(), 0);
    }
}
