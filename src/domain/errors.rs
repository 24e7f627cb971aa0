// src/domain/errors.rs
use thiserror::Error;

use crate::domain::article::ArticleStatus;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("invalid transition: cannot move article from {from} to {to}")]
    InvalidTransition { from: ArticleStatus, to: String },
}

impl DomainError {
    pub fn invalid_transition(from: ArticleStatus, to: impl Into<String>) -> Self {
        Self::InvalidTransition {
            from,
            to: to.into(),
        }
    }
}
