//! Watchlist entries.

use serde::{Deserialize, Serialize};

/// A company whose investor-relations page is monitored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchedCompany {
    /// Display name (e.g., "Acme Corp")
    pub name: String,

    /// Ticker symbol, uppercased on load. Unique within a watchlist.
    pub ticker: String,

    /// Investor-relations page URL
    pub ir_url: String,

    /// Lowercase substrings; a link is kept if any matches its text or URL.
    /// Empty means every link is kept.
    #[serde(default)]
    pub include_keywords: Vec<String>,
}

impl WatchedCompany {
    pub fn new(
        name: impl Into<String>,
        ticker: impl Into<String>,
        ir_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.into(),
            ir_url: ir_url.into(),
            include_keywords: Vec::new(),
        }
        .normalized()
    }

    /// Builder-style keyword setter.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_keywords = keywords.into_iter().map(Into::into).collect();
        self.normalized()
    }

    /// Uppercase the ticker and lowercase the keywords.
    pub fn normalized(mut self) -> Self {
        self.ticker = self.ticker.trim().to_uppercase();
        self.include_keywords = self
            .include_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        self
    }

    /// Display label used in logs and reports: `Name (TICKER)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.ticker)
    }
}
