//! Configuration module for Spider-Run
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; a missing file section falls back to the defaults
//! that run `scrapy crawl articles-spider -o items.jl`.
//!
//! # Example
//!
//! ```no_run
//! use spider_run::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("spider-run.toml")).unwrap();
//! println!("Spider to run: {}", config.crawl.spider);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlConfig, FrameworkConfig, ReportConfig, OUTPUT_PLACEHOLDER, SPIDER_PLACEHOLDER,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
