//! CSS selectors for the review listing template

use scraper::Selector;
use std::sync::LazyLock;

/// Characters stripped from a listing node id (`review-<n>`)
pub const REVIEW_ID_PREFIX_LEN: usize = 7;

/// Characters stripped from a comment node id (`comment-<n>`)
pub const COMMENT_ID_PREFIX_LEN: usize = 8;

/// Attribute on the collapse marker holding the prefixed review id
pub const DISPUTE_ATTR: &str = "data-taptap-dispute";

/// A compiled selector that remembers its source text for diagnostics
#[derive(Debug)]
pub struct Field {
    pub css: &'static str,
    selector: Selector,
}

impl Field {
    fn new(css: &'static str) -> Self {
        let selector = Selector::parse(css).expect("hardcoded selector is valid");
        Self { css, selector }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

/// All selectors used by the parsers
#[derive(Debug)]
pub struct Selectors {
    /// Top-level listing nodes, in document order
    pub listing: Field,
    pub review_body: Field,
    pub collapsed: Field,

    pub user: Field,
    pub create_at: Field,
    pub content: Field,
    pub device: Field,
    pub score: Field,

    pub vote_funny: Field,
    pub vote_up: Field,
    pub vote_down: Field,

    pub comment_item: Field,
    pub comment_body: Field,
    pub comment_time: Field,
}

pub static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    listing: Field::new("ul#reviewsList>li"),
    review_body: Field::new("div.review-item-text"),
    collapsed: Field::new("button.review-item-collapsed"),

    user: Field::new("div.item-text-header>span.taptap-user>a.taptap-user-name"),
    create_at: Field::new("div.item-text-header>a.text-header-time span[data-dynamic-time]"),
    content: Field::new("div.item-text-body"),
    device: Field::new("div.item-text-footer>span.text-footer-device"),
    score: Field::new("div.item-text-score>i.colored"),

    vote_funny: Field::new(
        r#"div.item-text-footer button[data-value="funny"]>span[data-taptap-ajax-vote="count"]"#,
    ),
    vote_up: Field::new(
        r#"div.item-text-footer button[data-value="up"]>span[data-taptap-ajax-vote="count"]"#,
    ),
    vote_down: Field::new(
        r#"div.item-text-footer button[data-value="down"]>span[data-taptap-ajax-vote="count"]"#,
    ),

    comment_item: Field::new("div.taptap-comments>ul>li"),
    comment_body: Field::new("div.comment-item-text"),
    comment_time: Field::new("div.item-text-footer span[data-dynamic-time]"),
});
