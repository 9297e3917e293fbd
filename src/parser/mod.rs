//! HTML extraction for review listing pages
//!
//! This module turns a rendered listing page into typed records:
//! - [`parse_page`] walks every listing node in document order
//! - [`parse_record`] turns one node into a review or a placeholder
//! - [`parse_comments`] reads the comments shown under a review
//! - [`TextExtractor`] and [`extract_score`] pull individual fields
//!
//! Failures are absorbed at the narrowest level that can handle them; see
//! [`error`] for the taxonomy.

mod comment;
pub mod error;
mod extract;
mod page;
mod review;
mod score;
pub mod selectors;

pub use comment::{parse_comment, parse_comments};
pub use error::{FieldMissing, PageFatal, RecordInvalid};
pub use extract::{parse_id, TextExtractor};
pub use page::{decode_page, parse_page, parse_page_bytes, parse_page_or_empty};
pub use review::{parse_collapsed, parse_record};
pub use score::{extract_score, score_from_style, SCORE_SCALE};
