//! Version tables
//!
//! An ordered, key-unique list of `(version id, protocol)` entries with an
//! index for lookups. The raw table and the release table share this type.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::{BUILTIN_VERSIONS, PENDING_VERSIONS};
use crate::error::{RegistryError, Result};
use crate::release::is_release;

/// A single version id and the protocol number it speaks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Version id (e.g., "1.14.4", "18w30a", "1.14 Pre-Release 1")
    pub id: String,
    /// Wire protocol number advertised in the handshake
    pub protocol: u32,
}

impl VersionEntry {
    pub fn new(id: impl Into<String>, protocol: u32) -> Self {
        Self {
            id: id.into(),
            protocol,
        }
    }

    /// Whether this entry is a numbered release
    pub fn is_release(&self) -> bool {
        is_release(&self.id)
    }
}

/// An immutable, ordered table of version entries with unique ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTable {
    entries: Vec<VersionEntry>,
    index: HashMap<String, usize>,
}

impl VersionTable {
    /// Build a table, rejecting empty ids and repeated ids.
    ///
    /// Nothing is returned on failure, so a half-valid table never exists.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = VersionEntry>,
    {
        let entries: Vec<VersionEntry> = entries.into_iter().collect();
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(RegistryError::InvalidVersionId {
                    reason: format!("empty id at position {}", position),
                });
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(RegistryError::DuplicateVersion {
                    id: entry.id.clone(),
                });
            }
        }

        Ok(Self { entries, index })
    }

    /// Build a table from `(id, protocol)` pairs
    pub fn from_pairs(pairs: &[(&str, u32)]) -> Result<Self> {
        Self::from_entries(pairs.iter().map(|&(id, protocol)| VersionEntry::new(id, protocol)))
    }

    /// The table shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_pairs(BUILTIN_VERSIONS)
    }

    /// The subset of this table whose ids are releases, order preserved
    pub fn releases(&self) -> Self {
        let entries: Vec<VersionEntry> = self
            .entries
            .iter()
            .filter(|e| e.is_release())
            .cloned()
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, e)| (e.id.clone(), position))
            .collect();
        Self { entries, index }
    }

    /// Get an entry by id
    pub fn get(&self, id: &str) -> Option<&VersionEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// Get the protocol for an id, or `NotFound`
    pub fn protocol(&self, id: &str) -> Result<u32> {
        self.get(id)
            .map(|e| e.protocol)
            .ok_or_else(|| RegistryError::NotFound {
                id: id.to_string(),
                suggestion: None,
            })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate entries in table order
    pub fn iter(&self) -> std::slice::Iter<'_, VersionEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[VersionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a VersionTable {
    type Item = &'a VersionEntry;
    type IntoIter = std::slice::Iter<'a, VersionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Recorded versions that are not part of the active table
pub fn pending_entries() -> impl Iterator<Item = VersionEntry> {
    PENDING_VERSIONS
        .iter()
        .map(|&(id, protocol)| VersionEntry::new(id, protocol))
}
