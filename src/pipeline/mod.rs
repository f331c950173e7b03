//! Change-detection pipeline.
//!
//! - `digest_links`: Fingerprint a normalized link list
//! - `calculate_diff`: Added/removed links between two observations
//! - `build_alert`: Render changes into a single email
//! - `Monitor`: Run the whole pass over the watchlist

pub mod diff;
pub mod fingerprint;
pub mod monitor;
pub mod report;

pub use diff::{DiffResult, calculate_diff};
pub use fingerprint::digest_links;
pub use monitor::{Monitor, RunOptions, RunOutcome, RunSummary};
pub use report::{AlertMessage, build_alert, render_body, subject_line};
