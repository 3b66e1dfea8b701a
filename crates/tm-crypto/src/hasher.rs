use sha2::{Digest, Sha256};
use tm_types::MetaDigest;

/// SHA-256 checksum of a metadata blob.
pub fn checksum(data: &[u8]) -> MetaDigest {
    MetaDigest::from_hash(Sha256::digest(data).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_deterministic() {
        let data = b"hello world";
        assert_eq!(checksum(data), checksum(data));
    }

    #[test]
    fn checksum_matches_known_vector() {
        assert_eq!(
            checksum(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            checksum(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn different_data_produces_different_checksums() {
        assert_ne!(checksum(b"root v1"), checksum(b"root v2"));
    }
}
