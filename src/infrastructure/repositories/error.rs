use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

const TBL_ARTICLE_SLUG: &str = "articles.slug";
const TBL_CATEGORY_SLUG: &str = "categories.slug";
const TBL_ARTICLE_CATEGORY: &str = "article_category.";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation if message.contains(TBL_ARTICLE_SLUG) => {
                    DomainError::Conflict("slug already exists".into())
                }
                ErrorKind::UniqueViolation if message.contains(TBL_CATEGORY_SLUG) => {
                    DomainError::Conflict("category slug already exists".into())
                }
                ErrorKind::UniqueViolation if message.contains(TBL_ARTICLE_CATEGORY) => {
                    DomainError::Conflict("category already attached".into())
                }
                ErrorKind::UniqueViolation => {
                    DomainError::Conflict("unique constraint violated".into())
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation => {
                    DomainError::Validation("check constraint violated".into())
                }
                ErrorKind::NotNullViolation => {
                    DomainError::Validation("required column missing".into())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
