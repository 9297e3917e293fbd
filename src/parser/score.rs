//! Score extraction
//!
//! The star rating is not rendered as text. It is the width of a colored
//! bar, stored in the indicator's inline style, with 70px meaning five stars.

use crate::parser::error::PageFatal;
use crate::parser::selectors::SELECTORS;
use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

/// Pixel width divided by this gives the score
pub const SCORE_SCALE: f64 = 70.0;

static WIDTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^width:\s?(\d+)px").expect("hardcoded regex pattern is valid")
});

/// Reads the score of a review body
///
/// The value is passed through unclamped. A missing indicator, a missing
/// `style` attribute or a style that does not start with `width:<n>px` means
/// the page template changed, so it is reported as [`PageFatal`].
pub fn extract_score(body: ElementRef<'_>) -> Result<f64, PageFatal> {
    let field = &SELECTORS.score;

    let indicator = body
        .select(field.selector())
        .next()
        .ok_or_else(|| PageFatal::new(format!("score indicator `{}` not found", field.css)))?;

    let style = indicator.value().attr("style").ok_or_else(|| {
        PageFatal::new(format!("score indicator `{}` has no style attribute", field.css))
    })?;

    score_from_style(style)
}

/// Parses the leading `width:<n>px` directive of an inline style
pub fn score_from_style(style: &str) -> Result<f64, PageFatal> {
    let captures = WIDTH_PATTERN
        .captures(style)
        .ok_or_else(|| PageFatal::new(format!("unexpected score style `{}`", style)))?;

    let width: f64 = captures[1]
        .parse()
        .map_err(|_| PageFatal::new(format!("unreadable score width `{}`", &captures[1])))?;

    Ok(width / SCORE_SCALE)
}
