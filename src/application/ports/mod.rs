// src/application/ports/mod.rs
pub mod time;
pub mod util;

pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
