//! Configuration module for Tap-Reviews
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every setting except the app id has a default, so a config can also be
//! built in code with [`Config::new`].
//!
//! # Example
//!
//! ```no_run
//! use tap_reviews::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawler will stop after page {}", config.crawler.max_page);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, FailurePolicy, HttpConfig, OutputConfig, DEFAULT_BASE_URL,
    DEFAULT_MAX_PAGE, DEFAULT_ORDER, DEFAULT_OUTPUT_DIR,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
