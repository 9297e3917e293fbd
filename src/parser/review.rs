//! Record parser: one listing node to one page record

use crate::parser::comment::parse_comments;
use crate::parser::error::{PageFatal, RecordInvalid};
use crate::parser::extract::{parse_id, TextExtractor};
use crate::parser::score::extract_score;
use crate::parser::selectors::{DISPUTE_ATTR, REVIEW_ID_PREFIX_LEN, SELECTORS};
use crate::record::{CollapsedReview, InvalidReview, PageRecord, Review, ReviewVote};
use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

static DISPUTE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^dispute-?(\d+)").expect("hardcoded regex pattern is valid")
});

/// Parses one listing node
///
/// # Decision order
///
/// 1. A node with a review body becomes a [`Review`]. Missing fields degrade
///    to empty values; a missing or malformed score, or a vote counter that
///    is not a number, is [`PageFatal`].
/// 2. A node with a collapse marker becomes a [`CollapsedReview`].
/// 3. Anything else becomes an [`InvalidReview`] and is logged.
///
/// # Returns
///
/// * `Ok(PageRecord)` - The review or its placeholder
/// * `Err(PageFatal)` - The node shows the page template has changed
pub fn parse_record(item: ElementRef<'_>) -> Result<PageRecord, PageFatal> {
    match item.select(SELECTORS.review_body.selector()).next() {
        Some(body) => parse_review(item, body).map(PageRecord::from),
        None => Ok(parse_placeholder(item)),
    }
}

fn parse_review(item: ElementRef<'_>, body: ElementRef<'_>) -> Result<Review, PageFatal> {
    let id = parse_id(item.value().attr("id"), REVIEW_ID_PREFIX_LEN);

    Ok(Review {
        id,
        user: body.required(&SELECTORS.user),
        create_at: body.required(&SELECTORS.create_at),
        score: extract_score(body)?,
        content: body.required(&SELECTORS.content),
        device: body.optional(&SELECTORS.device),
        vote: ReviewVote {
            funny: body.count(&SELECTORS.vote_funny)?,
            up: body.count(&SELECTORS.vote_up)?,
            down: body.count(&SELECTORS.vote_down)?,
        },
        comments: parse_comments(body).collect::<Result<_, _>>()?,
    })
}

fn parse_placeholder(item: ElementRef<'_>) -> PageRecord {
    match parse_collapsed(item) {
        Ok(collapsed) => collapsed.into(),
        Err(invalid) => {
            tracing::error!("Failed to parse listing node: {}", invalid);
            InvalidReview::default().into()
        }
    }
}

/// Reads the collapse marker of a listing node without a review body
pub fn parse_collapsed(item: ElementRef<'_>) -> Result<CollapsedReview, RecordInvalid> {
    let marker = item
        .select(SELECTORS.collapsed.selector())
        .next()
        .ok_or_else(|| RecordInvalid::from_markup(&item.html()))?;

    Ok(CollapsedReview {
        id: dispute_id(marker.value().attr(DISPUTE_ATTR)),
        error: marker.text().collect::<String>().trim().to_string(),
    })
}

/// Digits following the `dispute` prefix; trailing text is ignored
///
/// An absent attribute, or one without digits right after the prefix, is 0.
fn dispute_id(value: Option<&str>) -> u64 {
    value
        .and_then(|v| DISPUTE_ID_PATTERN.captures(v.trim()))
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}
