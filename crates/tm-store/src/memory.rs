use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use tm_crypto::{checksum, consistent_name};
use tm_types::{RoleName, SignedMeta, SizeLimit};
use tracing::{debug, trace};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::traits::MetadataStore;

/// In-memory, HashMap-based metadata store.
///
/// Stands in for a remote trust-metadata repository in tests. Every blob is
/// indexed twice:
///
/// - `meta`: role name, plus the `"<version>.<role>"` alias when the blob is
///   a signed envelope
/// - `consistent`: `"<role>.<sha256 hex>"`
///
/// There is no internal locking. Callers that share a store across threads
/// must serialize access themselves. Build one store per test.
#[derive(Clone, PartialEq, Eq)]
pub struct MemoryStore {
    meta: HashMap<RoleName, Bytes>,
    consistent: HashMap<RoleName, Bytes>,
    config: StoreConfig,
}

impl MemoryStore {
    /// Create a new empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a new empty store.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            meta: HashMap::new(),
            consistent: HashMap::new(),
            config,
        }
    }

    /// Create a store pre-populated with `initial`.
    ///
    /// Seed entries are indexed by role name and by consistent name. They are
    /// not parsed, so no `"<version>.<role>"` aliases are created for them.
    pub fn with_initial<I, K, V>(initial: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<RoleName>,
        V: Into<Bytes>,
    {
        let mut store = Self::new();
        store.seed(initial);
        store
    }

    fn seed<I, K, V>(&mut self, initial: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<RoleName>,
        V: Into<Bytes>,
    {
        for (name, meta) in initial {
            let name = name.into();
            let meta = meta.into();
            let path = consistent_path(&name, &meta);
            debug!(role = %name, %path, size = meta.len(), "seeded metadata");
            self.consistent.insert(path, meta.clone());
            self.meta.insert(name, meta);
        }
    }

    /// The store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of entries in the role-name index (version aliases included).
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    /// Returns `true` if the role-name index is empty.
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    /// Number of entries in the consistent-name index.
    pub fn consistent_len(&self) -> usize {
        self.consistent.len()
    }

    /// Sorted snapshot of the consistent-name index.
    pub fn consistent_names(&self) -> Vec<RoleName> {
        let mut names: Vec<RoleName> = self.consistent.keys().cloned().collect();
        names.sort();
        names
    }

    fn lookup(&self, name: &str) -> Option<&Bytes> {
        self.meta.get(name).or_else(|| self.consistent.get(name))
    }
}

fn consistent_path(name: &str, meta: &[u8]) -> RoleName {
    consistent_name(name, checksum(meta).as_ref())
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataStore for MemoryStore {
    fn get(&self, name: &str) -> StoreResult<Bytes> {
        match self.lookup(name) {
            Some(meta) => Ok(meta.clone()),
            None => {
                trace!(role = name, "metadata not found");
                Err(StoreError::not_found(name))
            }
        }
    }

    fn get_sized(&self, name: &str, size: SizeLimit) -> StoreResult<Bytes> {
        let meta = self.get(name)?;
        let cap = size.effective(self.config.max_download_size);
        if (meta.len() as u64) < cap {
            return Ok(meta);
        }
        // cap <= meta.len() here, so it fits in usize.
        Ok(meta.slice(..cap as usize))
    }

    fn set(&mut self, name: &str, meta: Bytes) -> StoreResult<()> {
        let role = RoleName::from(name);
        self.meta.insert(role.clone(), meta.clone());

        // Only signed envelopes get a version alias; keys and other raw
        // blobs are stored by name and checksum alone.
        let versioned = SignedMeta::version_of(&meta).map(|version| role.versioned(version));
        if let Some(alias) = &versioned {
            self.meta.insert(alias.clone(), meta.clone());
        }

        let path = consistent_path(name, &meta);
        debug!(
            role = name,
            size = meta.len(),
            versioned = versioned.as_ref().map(RoleName::as_str),
            %path,
            "stored metadata"
        );
        self.consistent.insert(path, meta);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> StoreResult<()> {
        if let Some(meta) = self.meta.remove(name) {
            let path = consistent_path(name, &meta);
            self.consistent.remove(path.as_str());
            debug!(role = name, %path, "removed metadata");
        }
        Ok(())
    }

    fn remove_all(&mut self) -> StoreResult<()> {
        debug!(
            entries = self.meta.len(),
            consistent = self.consistent.len(),
            "clearing store"
        );
        *self = Self::with_config(std::mem::take(&mut self.config));
        Ok(())
    }

    fn location(&self) -> String {
        self.config.location.clone()
    }

    fn list_files(&self) -> Vec<RoleName> {
        let mut names: Vec<RoleName> = self.meta.keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("meta_count", &self.meta.len())
            .field("consistent_count", &self.consistent.len())
            .field("location", &self.config.location)
            .finish()
    }
}
