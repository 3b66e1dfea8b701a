use std::collections::HashMap;

use bytes::Bytes;
use tm_types::{RoleName, SizeLimit};

use crate::error::StoreResult;

/// Read/write contract shared by every trust-metadata store.
///
/// Network- and disk-backed stores can fail on any call; the in-memory store
/// only ever fails lookups. Keeping the `StoreResult` return everywhere lets
/// test code substitute one for the other.
///
/// Names are resolved against two namespaces: role names (`"root"`, and the
/// version aliases `"1.root"`) and consistent names (`"root.<sha256 hex>"`).
pub trait MetadataStore {
    /// Read the full blob stored under `name`.
    ///
    /// Returns `Err(StoreError::MetaNotFound)` if no such name exists.
    fn get(&self, name: &str) -> StoreResult<Bytes>;

    /// Read at most `size` bytes of the blob stored under `name`.
    ///
    /// [`SizeLimit::NoLimit`] is capped at the store's maximum download size.
    /// A blob longer than the cap is truncated, not rejected.
    fn get_sized(&self, name: &str, size: SizeLimit) -> StoreResult<Bytes>;

    /// Store `meta` under `name`, replacing any previous value.
    fn set(&mut self, name: &str, meta: Bytes) -> StoreResult<()>;

    /// Store several blobs at once.
    ///
    /// Default implementation calls `set()` for each entry. Backends may
    /// override for better performance (e.g., a single upload).
    fn set_multi(&mut self, metas: HashMap<String, Bytes>) -> StoreResult<()> {
        for (name, meta) in metas {
            self.set(&name, meta)?;
        }
        Ok(())
    }

    /// Delete the metadata for `name`. Deleting a missing name succeeds.
    fn remove(&mut self, name: &str) -> StoreResult<()>;

    /// Delete everything.
    fn remove_all(&mut self) -> StoreResult<()>;

    /// Human-readable description of where the data lives.
    fn location(&self) -> String;

    /// Every name usable with `get` directly, excluding consistent names.
    fn list_files(&self) -> Vec<RoleName>;
}
