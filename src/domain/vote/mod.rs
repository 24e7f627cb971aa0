pub mod entity;
pub mod repository;

pub use entity::{HelpfulVote, NewHelpfulVote, VoteTally};
pub use repository::HelpfulVoteRepository;
