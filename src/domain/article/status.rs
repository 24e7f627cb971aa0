// src/domain/article/status.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Lifecycle status of an article.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Hidden,
    Archived,
}

/// Adjacency of the publication workflow: each entry lists the statuses a
/// given status may move to. Restricting the workflow is an edit to this table.
const TRANSITIONS: &[(ArticleStatus, &[ArticleStatus])] = &[
    (
        ArticleStatus::Draft,
        &[
            ArticleStatus::Published,
            ArticleStatus::Hidden,
            ArticleStatus::Archived,
        ],
    ),
    (
        ArticleStatus::Published,
        &[
            ArticleStatus::Draft,
            ArticleStatus::Hidden,
            ArticleStatus::Archived,
        ],
    ),
    (
        ArticleStatus::Hidden,
        &[
            ArticleStatus::Draft,
            ArticleStatus::Published,
            ArticleStatus::Archived,
        ],
    ),
    (
        ArticleStatus::Archived,
        &[
            ArticleStatus::Draft,
            ArticleStatus::Published,
            ArticleStatus::Hidden,
        ],
    ),
];

impl ArticleStatus {
    /// Every recognised status, in workflow order.
    pub const ALL: [ArticleStatus; 4] = [
        ArticleStatus::Draft,
        ArticleStatus::Published,
        ArticleStatus::Hidden,
        ArticleStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Hidden => "hidden",
            ArticleStatus::Archived => "archived",
        }
    }

    /// Names of all statuses, as stored in the `status` column.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(ArticleStatus::as_str).collect()
    }

    pub fn allowed_transitions(&self) -> &'static [ArticleStatus] {
        TRANSITIONS
            .iter()
            .find(|(from, _)| from == self)
            .map(|(_, targets)| *targets)
            .unwrap_or(&[])
    }

    pub fn can_transition_to(&self, target: ArticleStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// Same check for a raw status name; unknown names are never reachable.
    pub fn can_transition_to_named(&self, target: &str) -> bool {
        target
            .parse::<ArticleStatus>()
            .map(|status| self.can_transition_to(status))
            .unwrap_or(false)
    }

    /// Validate a move to `target`, returning the new status.
    pub fn transition_to(&self, target: ArticleStatus) -> DomainResult<ArticleStatus> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(DomainError::invalid_transition(*self, target.as_str()))
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            "hidden" => Ok(ArticleStatus::Hidden),
            "archived" => Ok(ArticleStatus::Archived),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}
