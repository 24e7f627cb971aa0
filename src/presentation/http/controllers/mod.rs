// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod categories;
pub mod search;
