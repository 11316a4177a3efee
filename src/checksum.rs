//! Checksum utilities for version table integrity

use sha2::{Digest, Sha256};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::VersionEntry;

/// SHA256 fingerprint of a version table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checksum(String);

impl Checksum {
    /// Compute checksum over ordered entries.
    ///
    /// Each entry contributes `id\tprotocol\n`, so reordering, renaming or
    /// renumbering any entry changes the result.
    pub fn of_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a VersionEntry>,
    {
        let mut hasher = Sha256::new();
        for entry in entries {
            hasher.update(entry.id.as_bytes());
            hasher.update(b"\t");
            hasher.update(entry.protocol.to_string().as_bytes());
            hasher.update(b"\n");
        }
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Get the hex string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify that entries match this checksum
    pub fn verify<'a, I>(&self, entries: I) -> bool
    where
        I: IntoIterator<Item = &'a VersionEntry>,
    {
        // Hex digests are compared case-insensitively
        self.0.eq_ignore_ascii_case(Self::of_entries(entries).as_str())
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Checksum {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Checksum {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
