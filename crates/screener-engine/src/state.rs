//! JSON file state store.

use async_trait::async_trait;
use screener_core::error::StateError;
use screener_core::traits::StateStore;
use screener_core::types::ScreeningState;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persists the screening state as a single pretty-printed JSON record.
///
/// Writes go to a sibling temp file first and are moved into place with a
/// rename, so a reader never observes a half-written record.
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl StateStore for JsonStateStore {
    async fn load(&self) -> Result<ScreeningState, StateError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no previous state");
                return Ok(ScreeningState::default());
            }
            Err(e) => return Err(StateError::Io(e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| StateError::Serialization(e.to_string()))
    }

    async fn save(&self, state: &ScreeningState) -> Result<(), StateError> {
        let json = serde_json::to_vec_pretty(state)
            .map_err(|e| StateError::Serialization(e.to_string()))?;

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), symbols = state.qualifying.len(), "state saved");
        Ok(())
    }
}
