//! Comment extraction
//!
//! Only comments rendered under the review on the same page are read;
//! comment pagination is not followed.

use crate::parser::error::PageFatal;
use crate::parser::extract::{parse_id, TextExtractor};
use crate::parser::selectors::{COMMENT_ID_PREFIX_LEN, SELECTORS};
use crate::record::{Comment, CommentDetail, CommentVote};
use scraper::ElementRef;

/// Iterates the comments of a review body in document order
///
/// Each comment is parsed as the iterator is advanced. A comment node without
/// a body yields an id-only placeholder.
pub fn parse_comments<'a>(
    body: ElementRef<'a>,
) -> impl Iterator<Item = Result<Comment, PageFatal>> + 'a {
    body.select(SELECTORS.comment_item.selector())
        .map(parse_comment)
}

/// Parses one comment listing node
///
/// Only a malformed vote counter is [`PageFatal`]; other missing fields
/// degrade to empty strings.
pub fn parse_comment(item: ElementRef<'_>) -> Result<Comment, PageFatal> {
    let id = parse_id(item.value().attr("id"), COMMENT_ID_PREFIX_LEN);

    let Some(body) = item.select(SELECTORS.comment_body.selector()).next() else {
        tracing::debug!("Comment {} has no body, keeping id only", id);
        return Ok(Comment::Placeholder { id });
    };

    Ok(Comment::Detailed(CommentDetail {
        id,
        user: body.required(&SELECTORS.user),
        time: body.required(&SELECTORS.comment_time),
        content: body.required(&SELECTORS.content),
        vote: CommentVote {
            up: body.count(&SELECTORS.vote_up)?,
            down: body.count(&SELECTORS.vote_down)?,
        },
    }))
}
