use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
        ports::{ClockPort, SlugGeneratorPort},
    },
    domain::category::{CategoryName, CategoryRepository, CategorySlug, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    slugger: Arc<SlugGeneratorPort>,
    clock: Arc<ClockPort>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        slugger: Arc<SlugGeneratorPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            repo,
            slugger,
            clock,
        }
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = self.slugger.slugify(name.as_str());
        if slug.is_empty() {
            return Err(ApplicationError::validation(format!(
                "category name '{name}' does not produce a usable slug"
            )));
        }

        let category = self
            .repo
            .insert(NewCategory {
                name,
                slug: CategorySlug::new(slug)?,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(category.into())
    }
}
