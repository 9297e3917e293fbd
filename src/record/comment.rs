use serde::Serialize;

/// A comment on a review
///
/// When the comment body is missing from the markup only the id survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Comment {
    Detailed(CommentDetail),
    Placeholder { id: u64 },
}

impl Comment {
    pub fn id(&self) -> u64 {
        match self {
            Self::Detailed(detail) => detail.id,
            Self::Placeholder { id } => *id,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Full detail of a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDetail {
    pub id: u64,
    pub user: String,
    pub time: String,
    pub content: String,
    pub vote: CommentVote,
}

/// Vote counters of a comment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommentVote {
    pub up: u64,
    pub down: u64,
}
