// src/domain/article/entity.rs
use crate::domain::article::status::ArticleStatus;
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleName, ArticleSlug, AuthorId,
};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

/// A knowledge-base article.
///
/// The status is only reachable through [`Article::status`] and only changes
/// through [`Article::transition_to`], so every change passes the workflow table.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub name: ArticleName,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub author_id: AuthorId,
    pub order: i32,
    pub featured: bool,
    status: ArticleStatus,
    version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A recorded move between two statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub article_id: ArticleId,
    pub from: ArticleStatus,
    pub to: ArticleStatus,
    pub changed_at: DateTime<Utc>,
}

impl Article {
    /// Rebuild an article from a stored row and its row version.
    pub fn restore(id: ArticleId, version: i64, stored: NewArticle) -> Self {
        let NewArticle {
            name,
            slug,
            content,
            author_id,
            order,
            featured,
            status,
            created_at,
            updated_at,
        } = stored;

        Self {
            id,
            name,
            slug,
            content,
            author_id,
            order,
            featured,
            status,
            version,
            created_at,
            updated_at,
        }
    }

    pub fn status(&self) -> ArticleStatus {
        self.status
    }

    /// Row version, bumped by every stored write. Used for optimistic updates.
    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn can_transition_to(&self, target: ArticleStatus) -> bool {
        self.status.can_transition_to(target)
    }

    /// Apply a workflow move in memory. Nothing changes when the move is rejected.
    pub fn transition_to(
        &mut self,
        target: ArticleStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<StatusChange> {
        let from = self.status;
        let to = from.transition_to(target)?;
        self.status = to;
        self.updated_at = now;
        Ok(StatusChange {
            article_id: self.id,
            from,
            to,
            changed_at: now,
        })
    }

    pub fn rename(&mut self, name: ArticleName, slug: ArticleSlug, now: DateTime<Utc>) {
        self.name = name;
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_content(&mut self, content: ArticleContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }

    pub fn set_order(&mut self, order: i32, now: DateTime<Utc>) {
        self.order = order;
        self.updated_at = now;
    }

    pub fn set_featured(&mut self, featured: bool, now: DateTime<Utc>) {
        self.featured = featured;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::DEFAULT_ARTICLE_ORDER;
    use crate::domain::errors::DomainError;
    use chrono::Utc;

    fn sample_article() -> Article {
        let now = Utc::now();
        Article::restore(
            ArticleId::new(1).unwrap(),
            1,
            NewArticle {
                name: ArticleName::new("Resetting a password").unwrap(),
                slug: ArticleSlug::new("resetting-a-password").unwrap(),
                content: ArticleContent::new("Open the account page.").unwrap(),
                author_id: AuthorId::new(1).unwrap(),
                order: DEFAULT_ARTICLE_ORDER,
                featured: false,
                status: ArticleStatus::Draft,
                created_at: now,
                updated_at: now,
            },
        )
    }

    #[test]
    fn restore_keeps_stored_version() {
        let article = sample_article();
        assert_eq!(article.version(), 1);
        assert_eq!(article.status(), ArticleStatus::Draft);
        let update = ArticleUpdate::new(article.id, article.version(), article.updated_at);
        assert_eq!(update.expected_version, 1);
        assert!(update.is_empty());
    }

    #[test]
    fn transition_updates_status_and_timestamp() {
        let mut article = sample_article();
        let later = article.updated_at + chrono::Duration::seconds(5);
        let change = article
            .transition_to(ArticleStatus::Published, later)
            .unwrap();
        assert_eq!(article.status(), ArticleStatus::Published);
        assert_eq!(article.updated_at, later);
        assert_eq!(change.from, ArticleStatus::Draft);
        assert_eq!(change.to, ArticleStatus::Published);
        assert_eq!(change.article_id, article.id);
    }

    #[test]
    fn rejected_transition_leaves_article_untouched() {
        let mut article = sample_article();
        let before = article.updated_at;
        let err = article
            .transition_to(ArticleStatus::Draft, before + chrono::Duration::seconds(1))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        assert_eq!(article.status(), ArticleStatus::Draft);
        assert_eq!(article.updated_at, before);
    }

    #[test]
    fn rename_replaces_name_and_slug() {
        let mut article = sample_article();
        let now = Utc::now();
        article.rename(
            ArticleName::new("Changing email").unwrap(),
            ArticleSlug::new("changing-email").unwrap(),
            now,
        );
        assert_eq!(article.name.as_str(), "Changing email");
        assert_eq!(article.slug.as_str(), "changing-email");
        assert_eq!(article.updated_at, now);
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub name: ArticleName,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub author_id: AuthorId,
    pub order: i32,
    pub featured: bool,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field changes for an existing article. Status is deliberately absent.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub name: Option<ArticleName>,
    pub slug: Option<ArticleSlug>,
    pub content: Option<ArticleContent>,
    pub order: Option<i32>,
    pub featured: Option<bool>,
    /// The write only applies while the stored row is still at this version.
    pub expected_version: i64,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, expected_version: i64, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            content: None,
            order: None,
            featured: None,
            expected_version,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: ArticleName, slug: ArticleSlug) -> Self {
        self.name = Some(name);
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.content.is_none()
            && self.order.is_none()
            && self.featured.is_none()
    }
}
