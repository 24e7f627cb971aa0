pub mod articles;
pub mod categories;
pub mod pagination;
pub mod serde_time;
pub mod votes;

pub use articles::{ArticleDetailDto, ArticleDto, StatusChangeDto, TransitionOptionsDto};
pub use categories::CategoryDto;
pub use pagination::Page;
pub use votes::{ArticleVotesDto, HelpfulVoteDto, VoteTallyDto};
