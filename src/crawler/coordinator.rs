//! Crawler coordinator - the page-by-page crawl loop
//!
//! This module drives the crawl:
//! - Building the listing URL for the current page
//! - Fetching and parsing the page, one request at a time
//! - Handing non-empty pages to the output handler
//! - Deciding, through [`CrawlState`], whether another page follows

use crate::config::{validate, Config, FailurePolicy};
use crate::crawler::{build_http_client, fetch_page, FetchResult};
use crate::output::{CrawlSummary, JsonPageWriter, OutputHandler};
use crate::parser::parse_page_bytes;
use crate::record::PageRecord;
use crate::state::{CrawlState, PageOutcome, StopReason};
use crate::url::{parse_base_url, ReviewUrlBuilder};
use crate::TapError;
use reqwest::Client;
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator<O: OutputHandler> {
    config: Config,
    client: Client,
    urls: ReviewUrlBuilder,
    output: O,
    state: CrawlState,
}

impl<O: OutputHandler> Coordinator<O> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration, fixed for the whole crawl
    /// * `output` - Where non-empty pages are written
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(TapError)` - Invalid configuration or HTTP client failure
    pub fn new(config: Config, output: O) -> Result<Self, TapError> {
        validate(&config)?;

        let base = parse_base_url(&config.crawler.base_url)?;
        let urls = ReviewUrlBuilder::new(base, config.crawler.app_id, config.crawler.order.clone());
        let client = build_http_client(&config.http)?;

        Ok(Self {
            config,
            client,
            urls,
            output,
            state: CrawlState::start(),
        })
    }

    /// Current state of the crawl
    pub fn state(&self) -> CrawlState {
        self.state
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs the crawl loop until the state machine stops
    ///
    /// Pages are handled strictly in sequence. With the `abort` failure
    /// policy a failed page ends the run with [`TapError::PageFailed`].
    pub async fn run(&mut self) -> Result<CrawlSummary, TapError> {
        let max_page = self.config.crawler.max_page;
        let mut summary = CrawlSummary::new(self.config.crawler.app_id, self.output.location());

        tracing::info!(
            "Starting crawl of app {} (max page {}, order `{}`, on failure: {})",
            self.config.crawler.app_id,
            max_page,
            self.config.crawler.order,
            self.config.crawler.on_page_failure
        );

        while let CrawlState::Running { page } = self.state {
            summary.last_page = page;
            let outcome = self.process_page(page, &mut summary).await?;
            self.state = self.state.transition(outcome, max_page);
        }

        // The loop only exits once the state is terminal
        let reason = self
            .state
            .stop_reason()
            .unwrap_or(StopReason::PageCeiling { max_page });
        summary.finish(reason);

        tracing::info!(
            "Crawl finished ({}): {} pages, {} records written to {}",
            reason,
            summary.pages_written,
            summary.records_written,
            summary.output
        );

        Ok(summary)
    }

    /// Fetches, parses and persists one page
    async fn process_page(
        &mut self,
        page: u32,
        summary: &mut CrawlSummary,
    ) -> Result<PageOutcome, TapError> {
        let url = self.urls.page_url(page);
        tracing::info!("Fetching `{}`", url);

        let records = match self.fetch_records(&url).await {
            Ok(records) => records,
            Err(reason) => return self.handle_failure(page, reason, summary),
        };

        if records.is_empty() {
            tracing::info!("No more data");
            return Ok(PageOutcome::Empty);
        }

        tracing::info!("Found {} records on page {}", records.len(), page);
        let path = self.output.write_page(page, &records)?;
        tracing::debug!("Page {} persisted to {}", page, path.display());
        summary.record_page(&records);

        Ok(PageOutcome::Written)
    }

    /// Fetches and parses a page, describing any failure
    async fn fetch_records(&self, url: &Url) -> Result<Vec<PageRecord>, String> {
        match fetch_page(&self.client, url).await {
            FetchResult::Success { body, .. } => {
                parse_page_bytes(&body).map_err(|e| e.to_string())
            }
            FetchResult::HttpError { status_code } => {
                tracing::error!("Request for `{}` returned HTTP {}", url, status_code);
                Err(format!("HTTP {}", status_code))
            }
            FetchResult::NetworkError { error } => {
                tracing::error!("Request for `{}` failed: {}", url, error);
                Err(error)
            }
        }
    }

    /// Applies the configured failure policy to a failed page
    fn handle_failure(
        &self,
        page: u32,
        reason: String,
        summary: &mut CrawlSummary,
    ) -> Result<PageOutcome, TapError> {
        match self.config.crawler.on_page_failure {
            FailurePolicy::Stop => {
                tracing::warn!("Page {} failed, treating it as the end of the listing", page);
                Ok(PageOutcome::Failed)
            }
            FailurePolicy::Skip => {
                tracing::warn!("Page {} failed, skipping it", page);
                summary.pages_skipped.push(page);
                Ok(PageOutcome::Skipped)
            }
            FailurePolicy::Abort => Err(TapError::PageFailed { page, reason }),
        }
    }
}

/// Runs a complete crawl writing JSON pages to the configured directory
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl completed
/// * `Err(TapError)` - Crawl could not start, a page could not be written,
///   or a page failed under the `abort` policy
pub async fn run_crawl(config: Config) -> Result<CrawlSummary, TapError> {
    let output = JsonPageWriter::new(&config.output.directory);
    let mut coordinator = Coordinator::new(config, output)?;
    coordinator.run().await
}
