pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryId, CategoryName, CategorySlug, NewCategory};
pub use repository::CategoryRepository;
