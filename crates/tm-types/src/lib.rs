//! Foundation types for the trust-metadata store.
//!
//! This crate provides the naming, checksum, and envelope types shared by the
//! hashing helpers in `tm-crypto` and the stores in `tm-store`.
//!
//! # Key Types
//!
//! - [`RoleName`] — Logical metadata name (`root`, `targets`, ...), or a
//!   synthetic alias such as `"1.root"` or a consistent name
//! - [`MetaDigest`] — SHA-256 checksum of a metadata blob
//! - [`SizeLimit`] — Caller-supplied read cap, with [`NO_SIZE_LIMIT`] as the
//!   "unknown size" sentinel
//! - [`SignedMeta`] — Signed-metadata envelope; only `signed.version` matters
//!   to the store

pub mod digest;
pub mod error;
pub mod limits;
pub mod role;
pub mod signed;

pub use digest::MetaDigest;
pub use error::TypeError;
pub use limits::{SizeLimit, MAX_DOWNLOAD_SIZE, NO_SIZE_LIMIT};
pub use role::RoleName;
pub use signed::{Signature, SignedCommon, SignedMeta};
