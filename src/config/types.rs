use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Default page ceiling
pub const DEFAULT_MAX_PAGE: u32 = 1000;

/// Default sort order token
pub const DEFAULT_ORDER: &str = "default";

/// Default site root
pub const DEFAULT_BASE_URL: &str = "https://www.taptap.com";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Main configuration structure for Tap-Reviews
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a configuration with defaults for everything but the app id
    pub fn new(app_id: u64) -> Self {
        Self {
            crawler: CrawlerConfig::new(app_id),
            http: HttpConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Identifier of the app whose reviews are crawled
    #[serde(rename = "app-id")]
    pub app_id: u64,

    /// Last page number the crawler will attempt
    #[serde(rename = "max-page", default = "default_max_page")]
    pub max_page: u32,

    /// Sort order token passed through to the listing URL
    #[serde(default = "default_order")]
    pub order: String,

    /// Site root the listing URLs are built on
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// What to do when a page cannot be fetched or parsed
    #[serde(rename = "on-page-failure", default)]
    pub on_page_failure: FailurePolicy,
}

impl CrawlerConfig {
    pub fn new(app_id: u64) -> Self {
        Self {
            app_id,
            max_page: DEFAULT_MAX_PAGE,
            order: default_order(),
            base_url: default_base_url(),
            on_page_failure: FailurePolicy::default(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User agent sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives one `page-<N>.json` file per page
    #[serde(default = "default_output_dir")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
        }
    }
}

/// Policy applied when a page fails to fetch or hits a fatal parse error
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Treat the failed page like the end of the listing
    #[default]
    Stop,
    /// Log the failure and move on to the next page
    Skip,
    /// Abort the crawl with an error
    Abort,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Skip => "skip",
            Self::Abort => "abort",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stop" => Ok(Self::Stop),
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            other => Err(format!(
                "unknown failure policy '{}', expected stop, skip or abort",
                other
            )),
        }
    }
}

fn default_max_page() -> u32 {
    DEFAULT_MAX_PAGE
}

fn default_order() -> String {
    DEFAULT_ORDER.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}
