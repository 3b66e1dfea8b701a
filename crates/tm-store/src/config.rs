use serde::{Deserialize, Serialize};
use tm_types::MAX_DOWNLOAD_SIZE;

/// Configuration for a [`MemoryStore`](crate::MemoryStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Cap applied to sized reads requested with `NO_SIZE_LIMIT`.
    pub max_download_size: u64,
    /// Human-readable label returned by `location()`.
    pub location: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_download_size: MAX_DOWNLOAD_SIZE,
            location: "memory".into(),
        }
    }
}
