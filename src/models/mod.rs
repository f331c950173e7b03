// src/models/mod.rs

//! Domain models for the monitor.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod company;
mod config;
mod link;
mod snapshot;

// Re-export all public types
pub use company::WatchedCompany;
pub use config::{CrawlerConfig, MailConfig, MonitorConfig, defaults};
pub use link::{LinkRecord, sort_links};
pub use snapshot::{ChangeRecord, CompanySnapshot, State};
