//! Record types produced by the page parser
//!
//! Every listing node on a page becomes exactly one [`PageRecord`]: a full
//! [`Review`], or a placeholder when the node carries no review body.
//! Records serialize to the JSON shape written to the page files.

mod comment;
mod review;

pub use comment::{Comment, CommentDetail, CommentVote};
pub use review::{Review, ReviewVote};

use serde::Serialize;

/// Error text carried by [`InvalidReview`]
pub const INVALID_FORMAT: &str = "invalid format";

/// One entry of a page result, in document order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageRecord {
    Review(Review),
    Collapsed(CollapsedReview),
    Invalid(InvalidReview),
}

impl PageRecord {
    /// Returns the record id (0 when it could not be recovered)
    pub fn id(&self) -> u64 {
        match self {
            Self::Review(review) => review.id,
            Self::Collapsed(collapsed) => collapsed.id,
            Self::Invalid(invalid) => invalid.id,
        }
    }

    /// Returns true if this is a placeholder rather than a full review
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Self::Review(_))
    }
}

impl From<Review> for PageRecord {
    fn from(review: Review) -> Self {
        Self::Review(review)
    }
}

impl From<CollapsedReview> for PageRecord {
    fn from(collapsed: CollapsedReview) -> Self {
        Self::Collapsed(collapsed)
    }
}

impl From<InvalidReview> for PageRecord {
    fn from(invalid: InvalidReview) -> Self {
        Self::Invalid(invalid)
    }
}

/// A review hidden behind a collapse button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollapsedReview {
    pub id: u64,
    /// Label text of the collapse button
    pub error: String,
}

/// A listing node with neither a review body nor a collapse button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidReview {
    pub id: u64,
    pub error: String,
}

impl Default for InvalidReview {
    fn default() -> Self {
        Self {
            id: 0,
            error: INVALID_FORMAT.to_string(),
        }
    }
}
