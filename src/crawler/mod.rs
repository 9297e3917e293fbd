//! Crawler module for fetching and processing listing pages
//!
//! This module contains the crawl logic, including:
//! - HTTP fetching (one request at a time, no retries)
//! - The page-by-page crawl loop and its stop conditions

mod coordinator;
mod fetcher;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_page, FetchResult};
