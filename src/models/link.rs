//! Link record extracted from an investor-relations page.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A hyperlink of interest.
///
/// Identity is the `(title, url)` pair. Field order matches the sorted-key
/// canonical encoding used for fingerprinting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LinkRecord {
    /// Whitespace-collapsed anchor text (falls back to the URL)
    pub title: String,

    /// Absolute URL
    pub url: String,
}

impl LinkRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Compare by `(lowercase title, lowercase url)`.
    ///
    /// Pairs differing only in case fall back to the exact text so the
    /// resulting order never depends on input order.
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        self.title
            .to_lowercase()
            .cmp(&other.title.to_lowercase())
            .then_with(|| self.url.to_lowercase().cmp(&other.url.to_lowercase()))
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.url.cmp(&other.url))
    }

    /// Format as `title -> url`.
    pub fn format_line(&self) -> String {
        format!("{} -> {}", self.title, self.url)
    }
}

/// Sort links in place by [`LinkRecord::display_cmp`].
pub fn sort_links(links: &mut [LinkRecord]) {
    links.sort_by(LinkRecord::display_cmp);
}
