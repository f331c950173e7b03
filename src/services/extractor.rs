// src/services/extractor.rs

//! Link extraction service.
//!
//! Turns raw page markup into a deduplicated, keyword-filtered, sorted and
//! capped list of [`LinkRecord`]s.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{LinkRecord, sort_links};
use crate::utils::resolve_url;

/// Extracts links of interest from an investor-relations page.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    anchor_sel: Selector,
    max_links: usize,
}

impl LinkExtractor {
    /// Create an extractor keeping at most `max_links` records.
    pub fn new(max_links: usize) -> Result<Self> {
        Ok(Self {
            anchor_sel: Self::parse_selector("a[href]")?,
            max_links,
        })
    }

    /// Extract links from `html`, resolving relative references against `base`.
    ///
    /// `keywords` must already be lowercase. When non-empty, an anchor is kept
    /// only if some keyword occurs in its lowercased text or absolute URL.
    pub fn extract(&self, html: &str, base: &Url, keywords: &[String]) -> Vec<LinkRecord> {
        let document = Html::parse_document(html);

        let mut seen = HashSet::new();
        let mut links = Vec::new();

        for anchor in document.select(&self.anchor_sel) {
            let Some(link) = Self::parse_anchor(&anchor, base, keywords) else {
                continue;
            };
            if seen.insert((link.title.clone(), link.url.clone())) {
                links.push(link);
            }
        }

        sort_links(&mut links);
        log::debug!(
            "collected {} candidate links from {}",
            links.len(),
            base.as_str()
        );

        links.truncate(self.max_links);
        links
    }

    fn parse_anchor(anchor: &ElementRef, base: &Url, keywords: &[String]) -> Option<LinkRecord> {
        let href = anchor.value().attr("href")?.trim();
        if href.is_empty() {
            return None;
        }

        let text = normalize_whitespace(&anchor.text().collect::<Vec<_>>().join(" "));
        let absolute = resolve_url(base, href);

        if !keywords.is_empty() {
            let lower_text = text.to_lowercase();
            let lower_url = absolute.to_lowercase();
            let matched = keywords
                .iter()
                .any(|k| lower_text.contains(k.as_str()) || lower_url.contains(k.as_str()));
            if !matched {
                return None;
            }
        }

        let title = if text.is_empty() { absolute.clone() } else { text };
        Some(LinkRecord::new(title, absolute))
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
