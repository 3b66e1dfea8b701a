//! Checksums and consistent names for trust metadata.
//!
//! A consistent snapshot publishes every metadata file twice: under its role
//! name and under a name derived from the SHA-256 checksum of its bytes.
//! Readers that know the checksum (from a parent role) fetch the pinned copy
//! and are guaranteed the exact bytes they expect.
//!
//! All crypto operations wrap established libraries — no custom cryptography.

pub mod consistent;
pub mod hasher;

pub use consistent::consistent_name;
pub use hasher::checksum;
