// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleName, ArticleSlug};
use crate::domain::errors::{DomainError, DomainResult};

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Derives article slugs from names. A slug is always exactly `slugify(name)`;
/// a collision with another article is a conflict rather than a suffixed slug.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub fn slug_for(&self, name: &ArticleName) -> DomainResult<ArticleSlug> {
        let slug = self.generator.slugify(name.as_str());
        if slug.is_empty() {
            return Err(DomainError::Validation(format!(
                "name '{name}' does not produce a usable slug"
            )));
        }
        ArticleSlug::new(slug)
    }

    pub async fn derive_unique_slug(
        &self,
        name: &ArticleName,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let slug = self.slug_for(name)?;
        match self.read_repo.find_by_slug(&slug).await? {
            Some(existing) if ignore_id == Some(existing.id) => Ok(slug),
            Some(_) => Err(DomainError::Conflict(format!(
                "an article with slug '{slug}' already exists"
            ))),
            None => Ok(slug),
        }
    }
}
