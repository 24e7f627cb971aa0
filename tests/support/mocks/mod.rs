// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod category_repos;
pub mod time;

pub use article_repos::RacingTransitionRepo;
pub use category_repos::VanishingCategoryRepo;
pub use self::time::{FixedClock, fixed_now};
