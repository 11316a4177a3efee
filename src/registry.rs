//! Version Registry
//!
//! The read-only entry point for protocol codecs and connection negotiation.
//! Every derived view is computed once in the constructor; afterwards the
//! registry is never mutated, so `&VersionRegistry` can be shared freely
//! across threads.

use std::sync::Arc;

use arc_swap::ArcSwap;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use semver::VersionReq;

use crate::checksum::Checksum;
use crate::error::{RegistryError, Result};
use crate::protocols::ProtocolSequence;
use crate::table::{VersionEntry, VersionTable};
use crate::version::ReleaseVersion;

/// Immutable mapping from version ids to protocol numbers
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    /// Every supported version
    table: VersionTable,
    /// Release-only subset of `table`
    releases: VersionTable,
    /// Distinct protocols of `table`
    protocols: ProtocolSequence,
    /// Distinct protocols of `releases`
    release_protocols: ProtocolSequence,
}

impl VersionRegistry {
    /// Build a registry around a validated table
    pub fn new(table: VersionTable) -> Self {
        let releases = table.releases();
        let protocols = ProtocolSequence::from_table(&table);
        let release_protocols = ProtocolSequence::from_table(&releases);

        tracing::debug!(
            versions = table.len(),
            releases = releases.len(),
            protocols = protocols.len(),
            oldest = ?protocols.first(),
            newest = ?protocols.last(),
            "version registry built"
        );

        Self {
            table,
            releases,
            protocols,
            release_protocols,
        }
    }

    /// Registry over the built-in table
    pub fn builtin() -> Result<Self> {
        let table = VersionTable::builtin().inspect_err(|e| {
            tracing::warn!(error = %e, "built-in version table failed validation");
        })?;
        Ok(Self::new(table))
    }

    /// Validate entries and build a registry in one step
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = VersionEntry>,
    {
        let table = VersionTable::from_entries(entries).inspect_err(|e| {
            tracing::warn!(error = %e, "version table failed validation");
        })?;
        Ok(Self::new(table))
    }

    /// Protocol spoken by `id`.
    ///
    /// A miss carries the closest known id, if any, as a suggestion.
    pub fn lookup_protocol(&self, id: &str) -> Result<u32> {
        match self.table.get(id) {
            Some(entry) => Ok(entry.protocol),
            None => Err(RegistryError::NotFound {
                id: id.to_string(),
                suggestion: self.suggest(id).map(|e| e.id.clone()),
            }),
        }
    }

    pub fn get(&self, id: &str) -> Option<&VersionEntry> {
        self.table.get(id)
    }

    pub fn is_supported(&self, id: &str) -> bool {
        self.table.contains(id)
    }

    /// Whether `id` is a release present in this registry.
    ///
    /// Unlike `release::is_release`, an unknown release id such as `1.15`
    /// yields false.
    pub fn is_supported_release(&self, id: &str) -> bool {
        self.releases.contains(id)
    }

    /// All entries, in table order. Call again to restart.
    pub fn all_versions(&self) -> impl ExactSizeIterator<Item = &VersionEntry> + Clone + '_ {
        self.table.iter()
    }

    /// Release entries, in table order. Call again to restart.
    pub fn release_versions(&self) -> impl ExactSizeIterator<Item = &VersionEntry> + Clone + '_ {
        self.releases.iter()
    }

    /// Distinct protocols of every version, ascending
    pub fn supported_protocols(&self) -> &ProtocolSequence {
        &self.protocols
    }

    /// Distinct protocols of release versions, ascending
    pub fn release_protocols(&self) -> &ProtocolSequence {
        &self.release_protocols
    }

    pub fn table(&self) -> &VersionTable {
        &self.table
    }

    pub fn releases(&self) -> &VersionTable {
        &self.releases
    }

    /// Whether a protocol reported by a server is one we speak
    pub fn supports_protocol(&self, protocol: u32) -> bool {
        self.protocols.contains(protocol)
    }

    pub fn supports_release_protocol(&self, protocol: u32) -> bool {
        self.release_protocols.contains(protocol)
    }

    /// Oldest and newest supported protocol
    pub fn protocol_range(&self) -> Option<(u32, u32)> {
        Some((self.protocols.first()?, self.protocols.last()?))
    }

    /// Every id speaking `protocol`, in table order
    pub fn versions_for_protocol(&self, protocol: u32) -> Vec<&VersionEntry> {
        self.table.iter().filter(|e| e.protocol == protocol).collect()
    }

    /// Newest release by release number
    pub fn latest_release(&self) -> Option<&VersionEntry> {
        self.releases
            .iter()
            .filter_map(|e| ReleaseVersion::parse(&e.id).ok().map(|v| (v, e)))
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, e)| e)
    }

    /// Releases whose version satisfies `req`, in table order
    pub fn releases_matching(&self, req: &VersionReq) -> Vec<&VersionEntry> {
        self.releases
            .iter()
            .filter(|e| {
                ReleaseVersion::parse(&e.id)
                    .map(|v| v.matches(req))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Closest known id to `query` by fuzzy score
    pub fn suggest(&self, query: &str) -> Option<&VersionEntry> {
        let matcher = SkimMatcherV2::default();
        let mut best: Option<(i64, &VersionEntry)> = None;

        for entry in self.table.iter() {
            if let Some(score) = matcher.fuzzy_match(&entry.id, query) {
                // Ties keep the earliest entry
                if best.map_or(true, |(top, _)| score > top) {
                    best = Some((score, entry));
                }
            }
        }

        best.map(|(_, entry)| entry)
    }

    /// SHA256 over the ordered table
    pub fn fingerprint(&self) -> Checksum {
        Checksum::of_entries(self.table.iter())
    }
}

/// A registry handle that can be swapped wholesale at runtime.
///
/// Readers get a complete snapshot and never block; `replace` publishes a new
/// registry without touching the old one, which lives until its last reader
/// drops it.
#[derive(Debug)]
pub struct SharedRegistry {
    current: ArcSwap<VersionRegistry>,
}

impl SharedRegistry {
    pub fn new(registry: VersionRegistry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
        }
    }

    /// Current registry snapshot
    pub fn load(&self) -> Arc<VersionRegistry> {
        self.current.load_full()
    }

    /// Publish a new registry, returning the previous one
    pub fn replace(&self, registry: VersionRegistry) -> Arc<VersionRegistry> {
        tracing::info!(
            versions = registry.table.len(),
            fingerprint = %registry.fingerprint(),
            "replacing version registry"
        );
        self.current.swap(Arc::new(registry))
    }
}
