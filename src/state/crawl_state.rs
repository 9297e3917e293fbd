//! Crawl state definitions for the page-by-page driver
//!
//! The driver starts on page 1 and moves one page at a time until a page is
//! empty, a page fails under the `stop` policy, or the page ceiling is passed.

use std::fmt;

/// Why a crawl stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// A page had no listing nodes
    EmptyPage { page: u32 },

    /// The last allowed page was handled
    PageCeiling { max_page: u32 },

    /// A page could not be fetched or parsed
    PageFailure { page: u32 },
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyPage { .. } => "empty_page",
            Self::PageCeiling { .. } => "page_ceiling",
            Self::PageFailure { .. } => "page_failure",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPage { page } => write!(f, "no more data on page {}", page),
            Self::PageCeiling { max_page } => write!(f, "reached page ceiling {}", max_page),
            Self::PageFailure { page } => write!(f, "page {} failed", page),
        }
    }
}

/// What happened to the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Records were found and persisted
    Written,

    /// The page had no listing nodes
    Empty,

    /// The page failed and the failure was passed over
    Skipped,

    /// The page failed and the failure ends the crawl
    Failed,
}

/// State of the crawl driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    /// Working on `page`
    Running { page: u32 },

    /// Terminal; no further pages are requested
    Stopped(StopReason),
}

impl CrawlState {
    /// Initial state: running on page 1
    pub fn start() -> Self {
        Self::Running { page: 1 }
    }

    /// Returns true if no further pages will be requested
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped(_))
    }

    /// The page being worked on, if still running
    pub fn current_page(&self) -> Option<u32> {
        match self {
            Self::Running { page } => Some(*page),
            Self::Stopped(_) => None,
        }
    }

    /// The reason the crawl stopped, if it has
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self {
            Self::Running { .. } => None,
            Self::Stopped(reason) => Some(*reason),
        }
    }

    /// Applies the outcome of the current page
    ///
    /// `Written` and `Skipped` move to the next page unless `max_page` has
    /// been handled. `Empty` and `Failed` stop immediately. A stopped state
    /// never changes.
    pub fn transition(self, outcome: PageOutcome, max_page: u32) -> Self {
        let Self::Running { page } = self else {
            return self;
        };

        match outcome {
            PageOutcome::Empty => Self::Stopped(StopReason::EmptyPage { page }),
            PageOutcome::Failed => Self::Stopped(StopReason::PageFailure { page }),
            PageOutcome::Written | PageOutcome::Skipped => {
                if page >= max_page {
                    Self::Stopped(StopReason::PageCeiling { max_page })
                } else {
                    Self::Running { page: page + 1 }
                }
            }
        }
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running { page } => write!(f, "running (page {})", page),
            Self::Stopped(reason) => write!(f, "stopped ({})", reason),
        }
    }
}
