// src/application/commands/articles/mod.rs
mod categories;
mod create;
mod service;
mod transition;
mod update;
mod votes;

pub use categories::AssignCategoriesCommand;
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use service::ArticleCommandService;
pub use transition::TransitionArticleCommand;
pub use update::UpdateArticleCommand;
pub use votes::CastVoteCommand;
