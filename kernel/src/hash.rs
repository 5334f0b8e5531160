//! Digests for cost matrices and tours.
//!
//! Every digest is SHA-256 over `domain || data`, rendered as
//! `sha256:<hex>`. The domain prefix keeps a matrix and a tour with the
//! same bytes from sharing a digest.

use sha2::{Digest, Sha256};

/// Rendered digest, `sha256:` followed by 64 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Domain prefix for cost matrix bytes.
pub const DOMAIN_COST_MATRIX: &[u8] = b"TSP::COST_MATRIX::V1\0";

/// Domain prefix for tour bytes (start, then visit order).
pub const DOMAIN_TOUR: &[u8] = b"TSP::TOUR::V1\0";

/// Hash `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let digest = Sha256::new().chain_update(domain).chain_update(data).finalize();
    ContentHash(format!("sha256:{}", hex::encode(digest)))
}
