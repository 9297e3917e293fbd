//! JSON file output handler
//!
//! Writes each page to `<dir>/page-<N>.json` as a pretty-printed JSON array,
//! indented with four spaces, UTF-8 with non-ASCII text left unescaped.

use crate::output::traits::{OutputHandler, OutputResult};
use crate::record::PageRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

/// File name used for a page
pub fn page_file_name(page: u32) -> String {
    format!("page-{}.json", page)
}

/// Serializes page records the way page files are written
pub fn to_page_json(records: &[PageRecord]) -> OutputResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Output handler writing one JSON file per page
#[derive(Debug)]
pub struct JsonPageWriter {
    directory: PathBuf,
    directory_ready: bool,
}

impl JsonPageWriter {
    /// Creates a writer for `directory`
    ///
    /// The directory is created on the first write, so a crawl that finds no
    /// data leaves nothing behind.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            directory_ready: false,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path a page is written to
    pub fn page_path(&self, page: u32) -> PathBuf {
        self.directory.join(page_file_name(page))
    }

    fn ensure_directory(&mut self) -> OutputResult<()> {
        if !self.directory_ready {
            std::fs::create_dir_all(&self.directory)?;
            self.directory_ready = true;
        }
        Ok(())
    }
}

impl OutputHandler for JsonPageWriter {
    fn write_page(&mut self, page: u32, records: &[PageRecord]) -> OutputResult<PathBuf> {
        self.ensure_directory()?;

        let path = self.page_path(page);
        let json = to_page_json(records)?;
        std::fs::write(&path, json)?;

        tracing::debug!("Wrote {} records to {}", records.len(), path.display());
        Ok(path)
    }

    fn location(&self) -> String {
        self.directory.display().to_string()
    }
}
