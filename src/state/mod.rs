//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: The crawl driver's two-state machine (running on a page, or stopped)
//! - `StopReason`: Why a crawl stopped
//! - `PageOutcome`: What happened to one page, driving the next transition

mod crawl_state;

// Re-export main types
pub use crawl_state::{CrawlState, PageOutcome, StopReason};
