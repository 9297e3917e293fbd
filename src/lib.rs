//! Tap-Reviews: a page-by-page review scraper
//!
//! This crate fetches paginated review listings for a single app, extracts
//! structured review and comment records from the rendered markup, and
//! writes one JSON document per page.

pub mod config;
pub mod crawler;
pub mod output;
pub mod parser;
pub mod record;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Tap-Reviews operations
#[derive(Debug, Error)]
pub enum TapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Page {page} failed: {reason}")]
    PageFailed { page: u32, reason: String },
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

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),
}

/// Result type alias for Tap-Reviews operations
pub type Result<T> = std::result::Result<T, TapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{Config, FailurePolicy};
pub use parser::{parse_page, parse_record};
pub use record::{CollapsedReview, Comment, InvalidReview, PageRecord, Review};
pub use state::{CrawlState, StopReason};
pub use crate::url::build_review_url;
