//! Page parser: a listing page to its ordered records

use crate::parser::error::PageFatal;
use crate::parser::review::parse_record;
use crate::parser::selectors::SELECTORS;
use crate::record::PageRecord;
use scraper::Html;
use std::borrow::Cow;

/// Decodes a response body as UTF-8 regardless of the declared charset
///
/// Invalid sequences are replaced rather than rejected.
pub fn decode_page(body: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(body)
}

/// Parses every listing node of a page, in document order
///
/// Parsing is all-or-nothing: the first [`PageFatal`] from any record fails
/// the page, and no partial list is returned.
///
/// # Example
///
/// ```
/// use tap_reviews::parser::parse_page;
///
/// let html = r#"<ul id="reviewsList"><li><div class="unknown"></div></li></ul>"#;
/// let records = parse_page(html).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].id(), 0);
/// ```
pub fn parse_page(html: &str) -> Result<Vec<PageRecord>, PageFatal> {
    let document = Html::parse_document(html);

    document
        .select(SELECTORS.listing.selector())
        .map(parse_record)
        .collect()
}

/// Decodes and parses a raw response body
///
/// A failed page is logged here, so callers only decide what the failure
/// means for the crawl.
pub fn parse_page_bytes(body: &[u8]) -> Result<Vec<PageRecord>, PageFatal> {
    parse_page(&decode_page(body)).inspect_err(|e| {
        tracing::error!(
            "Failed to parse page, check the target page markup and update the parser: {}",
            e
        );
    })
}

/// Parses a page, logging a failure and returning no records instead
///
/// An empty result is indistinguishable from the end of the listing.
pub fn parse_page_or_empty(html: &str) -> Vec<PageRecord> {
    parse_page_bytes(html.as_bytes()).unwrap_or_default()
}
