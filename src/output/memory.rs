//! In-memory output handler
//!
//! Keeps every written page in memory. Useful when the records are consumed
//! by the caller rather than written to disk.

use crate::output::traits::{OutputHandler, OutputResult};
use crate::record::PageRecord;
use std::path::PathBuf;

/// Output handler collecting pages in memory
#[derive(Debug, Default)]
pub struct MemoryOutput {
    pages: Vec<(u32, Vec<PageRecord>)>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages written so far, in write order
    pub fn pages(&self) -> &[(u32, Vec<PageRecord>)] {
        &self.pages
    }

    /// Records of one page, if it was written
    pub fn page(&self, page: u32) -> Option<&[PageRecord]> {
        self.pages
            .iter()
            .find(|(number, _)| *number == page)
            .map(|(_, records)| records.as_slice())
    }

    pub fn into_pages(self) -> Vec<(u32, Vec<PageRecord>)> {
        self.pages
    }
}

impl OutputHandler for MemoryOutput {
    fn write_page(&mut self, page: u32, records: &[PageRecord]) -> OutputResult<PathBuf> {
        self.pages.push((page, records.to_vec()));
        Ok(PathBuf::from(format!("memory:page-{}", page)))
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
