//! Configuration management
//!
//! Settings are read from `config.toml` in the user's config directory.

pub mod config;

pub use config::{ApiConfig, Config, DisplayConfig, OutputFormat};
