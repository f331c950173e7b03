//! Local filesystem storage implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::State;
use crate::storage::StateStorage;

/// Stores the state as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    /// Create a LocalStorage backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Read bytes, returning None if the file doesn't exist.
    async fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[async_trait]
impl StateStorage for LocalStorage {
    async fn load_state(&self) -> Result<State> {
        let Some(bytes) = self.read_bytes().await? else {
            log::info!("No previous state at {}", self.path.display());
            return Ok(State::empty());
        };

        match serde_json::from_slice::<State>(&bytes) {
            Ok(state) => {
                let state = state.restore_tickers();
                log::debug!(
                    "Loaded state with {} companies from {}",
                    state.len(),
                    self.path.display()
                );
                Ok(state)
            }
            Err(e) => {
                log::warn!(
                    "State file {} is malformed ({}); starting from empty state",
                    self.path.display(),
                    e
                );
                Ok(State::empty())
            }
        }
    }

    async fn save_state(&self, state: &State) -> Result<()> {
        let mut bytes = serde_json::to_vec_pretty(state)?;
        bytes.push(b'\n');
        self.write_bytes(&bytes).await
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompanySnapshot, LinkRecord, WatchedCompany};
    use tempfile::TempDir;

    fn sample_state() -> State {
        let company = WatchedCompany::new("Acme Corp", "ACME", "https://acme.example/ir");
        let mut state = State::empty();
        state.insert(CompanySnapshot::new(
            &company,
            "d1".into(),
            vec![LinkRecord::new("Press Release A", "https://x/a")],
        ));
        state
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_state() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("state.json"));

        let state = storage.load_state().await.unwrap();
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("nested/state.json"));
        let state = sample_state();

        storage.save_state(&state).await.unwrap();
        let loaded = storage.load_state().await.unwrap();

        assert_eq!(loaded, state);
        assert!(!tmp.path().join("nested/state.tmp").exists());
    }

    #[tokio::test]
    async fn test_written_keys_are_sorted() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("state.json"));
        storage.save_state(&sample_state()).await.unwrap();

        let text = std::fs::read_to_string(storage.path()).unwrap();
        let order = ["\"checked_at\"", "\"digest\"", "\"ir_url\"", "\"links\"", "\"name\""];
        let positions: Vec<usize> = order.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.find("\"companies\"").unwrap() < text.find("\"updated_at\"").unwrap());
    }

    #[tokio::test]
    async fn test_malformed_file_is_empty_state() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("state.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let state = LocalStorage::new(&path).load_state().await.unwrap();
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_previous_state() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("state.json"));
        storage.save_state(&sample_state()).await.unwrap();

        storage.save_state(&State::empty()).await.unwrap();
        assert!(storage.load_state().await.unwrap().is_empty());
    }
}
