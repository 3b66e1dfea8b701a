//! Trust-metadata storage.
//!
//! A trust-metadata repository serves signed role documents (root, targets,
//! snapshot, timestamp and delegated targets). Clients ask either for "the
//! latest root" or for "the root whose checksum is X"; both requests must
//! resolve to identical bytes.
//!
//! # Storage Backends
//!
//! All backends implement the [`MetadataStore`] trait:
//!
//! - [`MemoryStore`] -- `HashMap`-based store standing in for a remote
//!   repository in tests
//!
//! # Naming Rules
//!
//! 1. `set(role, blob)` makes `blob` readable as `role`.
//! 2. If `blob` is a signed-metadata envelope with version `v`, it is also
//!    readable as `"<v>.<role>"`, and stays readable that way after `role` is
//!    overwritten or removed.
//! 3. It is always readable as `"<role>.<sha256 hex of blob>"` until `role` is
//!    removed.
//! 4. The store never verifies signatures; it only stores bytes.

pub mod config;
pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::MetadataStore;
pub use tm_types::{RoleName, SizeLimit, MAX_DOWNLOAD_SIZE, NO_SIZE_LIMIT};
