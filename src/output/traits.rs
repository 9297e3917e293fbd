//! Output handler traits and types
//!
//! This module defines the trait interface for page sinks and the summary
//! reported when a crawl finishes.

use crate::record::PageRecord;
use crate::state::StopReason;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for page sinks
///
/// A sink receives the records of every non-empty page, in page order.
pub trait OutputHandler {
    /// Persists the records of one page
    ///
    /// # Arguments
    ///
    /// * `page` - The page number the records came from
    /// * `records` - The page's records in document order
    ///
    /// # Returns
    ///
    /// Where the page was written
    fn write_page(&mut self, page: u32, records: &[PageRecord]) -> OutputResult<PathBuf>;

    /// Describes where pages end up, for progress and summary output
    fn location(&self) -> String;
}

/// Summary of a finished (or aborted) crawl
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    pub app_id: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Number of page files written
    pub pages_written: u32,

    /// Pages that failed and were passed over
    pub pages_skipped: Vec<u32>,

    /// Last page number that was requested
    pub last_page: u32,

    /// Records written across all pages
    pub records_written: u64,

    /// Collapsed or invalid records among `records_written`
    pub placeholders_written: u64,

    pub stop_reason: Option<StopReason>,

    /// Where the pages were written
    pub output: String,
}

impl CrawlSummary {
    /// Creates an empty summary stamped with the current time
    pub fn new(app_id: u64, output: impl Into<String>) -> Self {
        Self {
            app_id,
            started_at: Utc::now(),
            finished_at: None,
            pages_written: 0,
            pages_skipped: Vec::new(),
            last_page: 0,
            records_written: 0,
            placeholders_written: 0,
            stop_reason: None,
            output: output.into(),
        }
    }

    /// Counts one written page
    pub fn record_page(&mut self, records: &[PageRecord]) {
        self.pages_written += 1;
        self.records_written += records.len() as u64;
        self.placeholders_written += records.iter().filter(|r| r.is_placeholder()).count() as u64;
    }

    /// Marks the crawl as finished
    pub fn finish(&mut self, reason: StopReason) {
        self.stop_reason = Some(reason);
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration in seconds, once finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}
