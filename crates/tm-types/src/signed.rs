//! The signed-metadata envelope.
//!
//! Every role document is serialized as
//!
//! ```json
//! {
//!   "signed": { "_type": "root", "expires": "...", "version": 3, ... },
//!   "signatures": [ { "keyid": "...", "method": "ed25519", "sig": "..." } ]
//! }
//! ```
//!
//! The store never checks signatures or the role-specific payload. It decodes
//! the envelope only to learn `signed.version`, so decoding is lenient: missing
//! or `null` fields take their defaults and unknown fields (`expires`
//! included) are ignored. Bytes that are not a JSON object of this shape (raw
//! key material, for example) simply have no version.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TypeError;

/// Fields common to the `signed` section of every role document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignedCommon {
    #[serde(rename = "_type", deserialize_with = "null_as_default")]
    pub role_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
}

/// One signature over the `signed` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signature {
    #[serde(rename = "keyid", deserialize_with = "null_as_default")]
    pub key_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sig: String,
}

/// A signed-metadata envelope with the role payload reduced to its common
/// fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignedMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub signed: SignedCommon,
    #[serde(deserialize_with = "null_as_default")]
    pub signatures: Vec<Signature>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SignedMeta {
    /// Decode a blob as a signed-metadata envelope. A bare `null` decodes to
    /// the empty envelope.
    pub fn parse(bytes: &[u8]) -> Result<Self, TypeError> {
        let meta: Option<Self> =
            serde_json::from_slice(bytes).map_err(|e| TypeError::InvalidMetadata(e.to_string()))?;
        Ok(meta.unwrap_or_default())
    }

    /// The envelope version of `bytes`, or `None` if the blob is not signed
    /// metadata.
    pub fn version_of(bytes: &[u8]) -> Option<i64> {
        Self::parse(bytes).ok().map(|meta| meta.signed.version)
    }
}
