//! Parse outcome types
//!
//! Each failure class has its own type so the place it is absorbed is
//! visible in signatures:
//! - [`FieldMissing`] never leaves the field extractor's caller; the field
//!   degrades to an empty string.
//! - [`RecordInvalid`] is turned into an `InvalidReview` by the record parser.
//! - [`PageFatal`] is the only error a record parser returns; the page parser
//!   drops the whole page when it sees one.

use thiserror::Error;

/// Longest markup excerpt carried in a [`RecordInvalid`]
const SNIPPET_LEN: usize = 200;

/// A required field was not found under its node
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no element matches `{selector}`")]
pub struct FieldMissing {
    pub selector: &'static str,
}

/// A listing node has neither a review body nor a collapse marker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized listing node: {snippet}")]
pub struct RecordInvalid {
    pub snippet: String,
}

impl RecordInvalid {
    /// Builds the error from the node markup, keeping a short excerpt
    pub fn from_markup(markup: &str) -> Self {
        let snippet: String = markup.chars().take(SNIPPET_LEN).collect();
        Self { snippet }
    }
}

/// The page markup no longer matches the expected template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("page template mismatch: {reason}")]
pub struct PageFatal {
    pub reason: String,
}

impl PageFatal {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
