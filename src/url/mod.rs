//! URL handling module for Tap-Reviews
//!
//! Builds the review listing URL for a given app, page number and sort order.
//! The query shape matches what the site serves:
//! `<base>/app/<id>/review?page=<page>&order=<order>`.

use crate::UrlError;
use url::Url;

/// Parses and checks the site root listing URLs are built on
///
/// # Examples
///
/// ```
/// use tap_reviews::url::parse_base_url;
///
/// let base = parse_base_url("https://www.taptap.com").unwrap();
/// assert_eq!(base.host_str(), Some("www.taptap.com"));
/// assert!(parse_base_url("ftp://www.taptap.com").is_err());
/// ```
pub fn parse_base_url(base_url: &str) -> Result<Url, UrlError> {
    let url = Url::parse(base_url).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    Ok(url)
}

/// Builds the review listing URL for one page
///
/// The order token is form-encoded into the query string. Any path already
/// present on `base` is kept as a prefix.
///
/// # Examples
///
/// ```
/// use tap_reviews::url::{build_review_url, parse_base_url};
///
/// let base = parse_base_url("https://www.taptap.com").unwrap();
/// let url = build_review_url(&base, 84458, 3, "default");
/// assert_eq!(
///     url.as_str(),
///     "https://www.taptap.com/app/84458/review?page=3&order=default"
/// );
/// ```
pub fn build_review_url(base: &Url, app_id: u64, page: u32, order: &str) -> Url {
    let mut url = base.clone();

    let prefix = base.path().trim_end_matches('/');
    url.set_path(&format!("{}/app/{}/review", prefix, app_id));
    url.set_fragment(None);

    url.query_pairs_mut()
        .clear()
        .append_pair("page", &page.to_string())
        .append_pair("order", order);

    url
}

/// Listing URL builder bound to one app and sort order
#[derive(Debug, Clone)]
pub struct ReviewUrlBuilder {
    base: Url,
    app_id: u64,
    order: String,
}

impl ReviewUrlBuilder {
    pub fn new(base: Url, app_id: u64, order: impl Into<String>) -> Self {
        Self {
            base,
            app_id,
            order: order.into(),
        }
    }

    /// Returns the listing URL for `page`
    pub fn page_url(&self, page: u32) -> Url {
        build_review_url(&self.base, self.app_id, page, &self.order)
    }
}
