//! Row stream digests
//!
//! Incremental SHA-256 over the canonical JSON serialization of each row.
//! Two runs (or two partitioned runs concatenated in order) produced the
//! same rows exactly when their digests match, which is how regression
//! suites and cross-partition checks compare outputs without storing them.

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("row serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Accumulating digest over a stream of rows
///
/// # Example
/// ```
/// use market_datagen_core_rs::digest::RowDigest;
///
/// let mut a = RowDigest::new();
/// let mut b = RowDigest::new();
/// a.update(&("ROW", 1)).unwrap();
/// b.update(&("ROW", 1)).unwrap();
/// assert_eq!(a.finalize(), b.finalize());
/// ```
#[derive(Debug, Default)]
pub struct RowDigest {
    hasher: Sha256,
    rows: u64,
}

impl RowDigest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one row into the digest. A newline separates rows so the
    /// digest distinguishes row boundaries.
    pub fn update<T: Serialize>(&mut self, row: &T) -> Result<(), DigestError> {
        let json = serde_json::to_string(row)?;
        self.hasher.update(json.as_bytes());
        self.hasher.update(b"\n");
        self.rows += 1;
        Ok(())
    }

    /// Rows folded in so far.
    pub fn row_count(&self) -> u64 {
        self.rows
    }

    /// Hex digest of everything folded in.
    pub fn finalize(self) -> String {
        format!("{:x}", self.hasher.finalize())
    }
}
