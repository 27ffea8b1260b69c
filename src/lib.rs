//! Spider-Run: a driver for an external crawling framework
//!
//! This crate prepares an output directory, prints diagnostics about the
//! working directory, runs a single named spider through the framework's
//! command-line interface and reports on the JSON-lines file it produces.

pub mod config;
pub mod output;
pub mod process;
pub mod runner;
pub mod state;
pub mod tree;

use thiserror::Error;

/// Main error type for Spider-Run operations
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Crawl process failed with exit code: {status}")]
    CrawlFailed { status: process::ExitOutcome },

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::RunState,
        to: state::RunState,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Spider-Run operations
pub type Result<T> = std::result::Result<T, RunnerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use runner::{ensure_output_dir, Orchestrator, RunReport};
pub use state::RunState;
