//! Read-size limits.
//!
//! Callers usually know how large a metadata file should be (snapshot and
//! targets sizes are recorded by their parent role). Timestamp metadata and
//! sometimes root are fetched without a known size; those reads pass
//! [`NO_SIZE_LIMIT`] and the store caps them at [`MAX_DOWNLOAD_SIZE`].

use serde::{Deserialize, Serialize};

/// Upper bound on any read whose size the caller could not predict (100 MiB).
pub const MAX_DOWNLOAD_SIZE: u64 = 100 << 20;

/// Sentinel requesting "no caller-specified limit".
pub const NO_SIZE_LIMIT: SizeLimit = SizeLimit::NoLimit;

/// Maximum number of bytes a sized read may return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeLimit {
    /// Size unknown to the caller; substitute the store's download maximum.
    NoLimit,
    /// Return at most this many bytes.
    AtMost(u64),
}

impl SizeLimit {
    /// The concrete byte cap, substituting `max_download_size` for
    /// [`SizeLimit::NoLimit`].
    pub fn effective(self, max_download_size: u64) -> u64 {
        match self {
            SizeLimit::NoLimit => max_download_size,
            SizeLimit::AtMost(n) => n,
        }
    }
}

impl From<u64> for SizeLimit {
    fn from(n: u64) -> Self {
        SizeLimit::AtMost(n)
    }
}

impl From<Option<u64>> for SizeLimit {
    fn from(n: Option<u64>) -> Self {
        n.map_or(SizeLimit::NoLimit, SizeLimit::AtMost)
    }
}
