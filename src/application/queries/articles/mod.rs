mod get_by_id;
mod get_by_slug;
mod history;
mod list;
mod search;
mod service;
mod statuses;
mod votes;

pub use get_by_id::GetArticleByIdQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use history::StatusHistoryQuery;
pub use list::ListArticlesQuery;
pub use search::{SEARCH_TERM_MAX_LEN, SearchArticlesQuery};
pub use service::ArticleQueryService;
pub use statuses::TransitionOptionsQuery;
pub use votes::ArticleVotesQuery;
