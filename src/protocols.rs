//! Protocol sequences
//!
//! The distinct protocol numbers of a table, strictly ascending. Because
//! protocol numbers grow with release order this is also chronological.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::table::{VersionEntry, VersionTable};

/// Strictly ascending, duplicate-free protocol numbers
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProtocolSequence(Vec<u32>);

impl ProtocolSequence {
    /// Deduplicate and sort arbitrary protocol numbers
    pub fn from_protocols<I>(protocols: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let set: BTreeSet<u32> = protocols.into_iter().collect();
        Self(set.into_iter().collect())
    }

    /// Collect the protocols of any sequence of entries
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a VersionEntry>,
    {
        Self::from_protocols(entries.into_iter().map(|e| e.protocol))
    }

    pub fn from_table(table: &VersionTable) -> Self {
        Self::from_entries(table.iter())
    }

    /// Membership by binary search
    pub fn contains(&self, protocol: u32) -> bool {
        self.0.binary_search(&protocol).is_ok()
    }

    /// Whether every protocol here also appears in `other`
    pub fn is_subset_of(&self, other: &ProtocolSequence) -> bool {
        self.0.iter().all(|&p| other.contains(p))
    }

    /// Oldest protocol
    pub fn first(&self) -> Option<u32> {
        self.0.first().copied()
    }

    /// Newest protocol
    pub fn last(&self) -> Option<u32> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u32>> {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProtocolSequence {
    type Item = u32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ProtocolSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
