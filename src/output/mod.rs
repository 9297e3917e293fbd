//! Output module for persisting pages and reporting crawl results
//!
//! This module handles:
//! - Writing one JSON document per page
//! - Collecting pages in memory for embedding callers
//! - Summarizing and printing crawl results

mod json_output;
mod memory;
pub mod stats;
mod traits;

pub use json_output::{page_file_name, to_page_json, JsonPageWriter};
pub use memory::MemoryOutput;
pub use stats::{format_summary, print_summary};
pub use traits::{CrawlSummary, OutputError, OutputHandler, OutputResult};
