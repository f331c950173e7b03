//! Persisted per-company snapshots and per-run change records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{LinkRecord, WatchedCompany};

/// Last observed link state for one company.
///
/// Fields are declared in sorted order so the state file keeps sorted keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanySnapshot {
    /// When the page was fetched
    pub checked_at: DateTime<Utc>,

    /// Hex SHA-256 of the canonical link list
    pub digest: String,

    /// Investor-relations page URL at check time
    pub ir_url: String,

    /// Extracted links, sorted and capped
    #[serde(default)]
    pub links: Vec<LinkRecord>,

    /// Company display name
    pub name: String,

    /// Ticker; stored as the map key in the state file
    #[serde(skip)]
    pub ticker: String,
}

impl CompanySnapshot {
    /// Build a fresh snapshot for `company`, checked now.
    pub fn new(company: &WatchedCompany, digest: String, links: Vec<LinkRecord>) -> Self {
        Self {
            checked_at: Utc::now(),
            digest,
            ir_url: company.ir_url.clone(),
            links,
            name: company.name.clone(),
            ticker: company.ticker.clone(),
        }
    }
}

/// The durable state artifact: one snapshot per ticker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct State {
    /// Snapshots keyed by ticker
    #[serde(default)]
    pub companies: BTreeMap<String, CompanySnapshot>,

    /// When the state was last written
    pub updated_at: DateTime<Utc>,
}

impl State {
    /// Empty state, as on the very first run.
    pub fn empty() -> Self {
        Self {
            companies: BTreeMap::new(),
            updated_at: Utc::now(),
        }
    }

    /// Look up the snapshot for a ticker.
    pub fn get(&self, ticker: &str) -> Option<&CompanySnapshot> {
        self.companies.get(ticker)
    }

    /// Record a snapshot, replacing any previous one for the same ticker.
    pub fn insert(&mut self, snapshot: CompanySnapshot) {
        self.companies.insert(snapshot.ticker.clone(), snapshot);
    }

    /// Copy map keys into each snapshot's `ticker` field after deserializing.
    pub fn restore_tickers(mut self) -> Self {
        for (ticker, snapshot) in self.companies.iter_mut() {
            snapshot.ticker = ticker.clone();
        }
        self
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::empty()
    }
}

/// Links added and removed for one company during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub name: String,
    pub ticker: String,
    pub ir_url: String,
    pub added: Vec<LinkRecord>,
    pub removed: Vec<LinkRecord>,
}

impl ChangeRecord {
    pub fn new(
        company: &WatchedCompany,
        added: Vec<LinkRecord>,
        removed: Vec<LinkRecord>,
    ) -> Self {
        Self {
            name: company.name.clone(),
            ticker: company.ticker.clone(),
            ir_url: company.ir_url.clone(),
            added,
            removed,
        }
    }
}
