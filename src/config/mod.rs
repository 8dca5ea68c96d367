/// Application settings loaded from config.toml
pub mod app;

/// Fixture records loaded into the store at startup
pub mod seed;
