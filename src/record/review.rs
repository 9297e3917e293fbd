use super::Comment;
use serde::Serialize;

/// A fully parsed review
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub user: String,
    /// Timestamp as displayed on the page
    pub create_at: String,
    /// Star rating, the indicator width divided by 70.0 without clamping
    pub score: f64,
    pub content: String,
    /// Device line, `None` when the page does not show one
    pub device: Option<String>,
    pub vote: ReviewVote,
    /// Comments rendered on the same page as the review
    pub comments: Vec<Comment>,
}

/// Vote counters of a review
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReviewVote {
    pub funny: u64,
    pub up: u64,
    pub down: u64,
}
