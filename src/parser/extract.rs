//! Field extraction from a DOM subtree
//!
//! [`TextExtractor`] keeps the required/optional distinction explicit:
//! - [`TextExtractor::optional`] returns `None` when the field is absent.
//! - [`TextExtractor::required`] logs the miss and returns an empty string,
//!   so one missing field never costs the rest of the record.

use crate::parser::error::{FieldMissing, PageFatal};
use crate::parser::selectors::Field;
use scraper::ElementRef;

/// Text lookup capability over a DOM node
pub trait TextExtractor {
    /// Trimmed text of the first descendant matching `field`
    fn select_text(&self, field: &Field) -> Option<String>;

    /// Markup of the node, for diagnostics
    fn markup(&self) -> String;

    /// Text of a field that must be present
    fn try_required(&self, field: &Field) -> Result<String, FieldMissing> {
        self.select_text(field)
            .ok_or(FieldMissing { selector: field.css })
    }

    /// Text of a field that must be present, or `""` after logging the miss
    fn required(&self, field: &Field) -> String {
        match self.try_required(field) {
            Ok(text) => text,
            Err(missing) => {
                tracing::error!("Failed to extract field: {}", missing);
                tracing::debug!("Markup without field: {}", self.markup());
                String::new()
            }
        }
    }

    /// Text of a field that may legitimately be absent
    fn optional(&self, field: &Field) -> Option<String> {
        self.select_text(field)
    }

    /// Vote counter under `field`
    ///
    /// Empty or absent text counts as 0. Text that is not a number means the
    /// counter markup changed and fails the page.
    fn count(&self, field: &Field) -> Result<u64, PageFatal> {
        let text = self.required(field);
        if text.is_empty() {
            return Ok(0);
        }

        text.parse::<u64>().map_err(|_| {
            PageFatal::new(format!(
                "vote count `{}` under `{}` is not a number",
                text, field.css
            ))
        })
    }
}

impl TextExtractor for ElementRef<'_> {
    fn select_text(&self, field: &Field) -> Option<String> {
        self.select(field.selector())
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
    }

    fn markup(&self) -> String {
        self.html()
    }
}

/// Recovers a numeric id from a prefixed attribute value
///
/// The first `prefix_len` bytes are dropped and the rest parsed as an
/// integer. An absent attribute or an unparseable suffix yields 0.
///
/// # Examples
///
/// ```
/// use tap_reviews::parser::parse_id;
///
/// assert_eq!(parse_id(Some("review-1234"), 7), 1234);
/// assert_eq!(parse_id(Some("review-"), 7), 0);
/// assert_eq!(parse_id(None, 7), 0);
/// ```
pub fn parse_id(value: Option<&str>, prefix_len: usize) -> u64 {
    value
        .and_then(|v| v.get(prefix_len..))
        .and_then(|suffix| suffix.trim().parse().ok())
        .unwrap_or(0)
}
