//! Infrastructure layer with configuration adapters.

/// Application configuration.
pub mod config;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigStore, LogLevel};
