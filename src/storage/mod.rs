//! Storage abstractions for snapshot persistence.
//!
//! The state artifact is a single JSON document, fully replaced on every run:
//!
//! ```text
//! {
//!   "companies": {
//!     "ACME": { "checked_at": ..., "digest": ..., "ir_url": ..., "links": [...], "name": ... }
//!   },
//!   "updated_at": "2026-03-14T09:26:53Z"
//! }
//! ```

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::State;

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for state storage backends.
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Load the previous state.
    ///
    /// Returns an empty state when none has been written yet or when the
    /// stored document cannot be parsed.
    async fn load_state(&self) -> Result<State>;

    /// Replace the stored state.
    async fn save_state(&self, state: &State) -> Result<()>;

    /// Human-readable location for logs.
    fn location(&self) -> String;
}
