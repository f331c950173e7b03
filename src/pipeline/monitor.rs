// src/pipeline/monitor.rs

//! Monitoring run: fetch → extract → fingerprint → compare → persist → report.

use chrono::Utc;
use url::Url;

use crate::error::Result;
use crate::models::{ChangeRecord, CompanySnapshot, MonitorConfig, State, WatchedCompany};
use crate::notify::{MailCredentials, Notifier};
use crate::pipeline::{AlertMessage, build_alert, calculate_diff, digest_links};
use crate::services::{LinkExtractor, PageFetcher};
use crate::storage::StateStorage;

/// Per-run switches from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Report companies seen for the first time
    pub notify_on_first_run: bool,
    /// Build the alert but do not send it
    pub dry_run: bool,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing to report
    NoChanges,
    /// Alert built but only meant for display
    DryRun(AlertMessage),
    /// Alert dispatched
    Sent(AlertMessage),
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub companies_checked: usize,
    pub changes: Vec<ChangeRecord>,
    pub outcome: RunOutcome,
}

impl RunSummary {
    /// Number of companies with reported changes.
    pub fn changed_count(&self) -> usize {
        self.changes.len()
    }
}

/// Runs one monitoring pass over the watchlist.
pub struct Monitor {
    config: MonitorConfig,
    options: RunOptions,
    credentials: MailCredentials,
    extractor: LinkExtractor,
}

impl Monitor {
    pub fn new(
        config: MonitorConfig,
        options: RunOptions,
        credentials: MailCredentials,
    ) -> Result<Self> {
        let extractor = LinkExtractor::new(config.crawler.max_links)?;
        Ok(Self {
            config,
            options,
            credentials,
            extractor,
        })
    }

    /// Check every company in order, persist the new state, then report.
    ///
    /// The first fetch failure aborts the run before any state is written.
    pub async fn run(
        &self,
        fetcher: &dyn PageFetcher,
        storage: &dyn StateStorage,
        notifier: &dyn Notifier,
    ) -> Result<RunSummary> {
        let prior = storage.load_state().await?;
        log::info!(
            "Checking {} companies ({} with previous snapshots)",
            self.config.companies.len(),
            prior.len()
        );

        let mut next = State::empty();
        let mut changes = Vec::new();

        for company in &self.config.companies {
            let (snapshot, change) = self.check_company(company, &prior, fetcher).await?;
            next.insert(snapshot);
            changes.extend(change);
        }

        next.updated_at = Utc::now();
        storage.save_state(&next).await?;
        log::info!("State saved to {}", storage.location());

        let outcome = if changes.is_empty() {
            RunOutcome::NoChanges
        } else {
            let alert = build_alert(&changes, &self.credentials, Utc::now())?;
            if self.options.dry_run {
                RunOutcome::DryRun(alert)
            } else {
                notifier.send(&alert).await?;
                log::info!("Alert sent to {}", alert.to);
                RunOutcome::Sent(alert)
            }
        };

        Ok(RunSummary {
            companies_checked: self.config.companies.len(),
            changes,
            outcome,
        })
    }

    /// Fetch one company and compare it against its previous snapshot.
    async fn check_company(
        &self,
        company: &WatchedCompany,
        prior: &State,
        fetcher: &dyn PageFetcher,
    ) -> Result<(CompanySnapshot, Option<ChangeRecord>)> {
        let html = fetcher.fetch(&company.ir_url).await?;
        let base = Url::parse(&company.ir_url)?;
        let links = self
            .extractor
            .extract(&html, &base, &company.include_keywords);
        let digest = digest_links(&links)?;

        let previous = prior.get(&company.ticker);
        let first_run = previous.is_none();
        let changed = previous.is_some_and(|p| p.digest != digest);

        let change = if changed || (first_run && self.options.notify_on_first_run) {
            let previous_links = previous.map(|p| p.links.as_slice()).unwrap_or_default();
            let diff = calculate_diff(previous_links, &links);
            log::info!(
                "{}: {} changes ({} added, {} removed)",
                company.label(),
                diff.change_count(),
                diff.added.len(),
                diff.removed.len()
            );
            diff.has_changes()
                .then(|| ChangeRecord::new(company, diff.added, diff.removed))
        } else {
            if first_run {
                log::info!("{}: first observation, {} links", company.label(), links.len());
            } else {
                log::debug!("{}: unchanged", company.label());
            }
            None
        };

        Ok((CompanySnapshot::new(company, digest, links), change))
    }
}
