//! Version table manifests
//!
//! A JSON export of the active table, used to ship an updated table next to
//! the binary without rebuilding it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checksum::Checksum;
use crate::error::{RegistryError, Result};
use crate::registry::VersionRegistry;
use crate::table::{VersionEntry, VersionTable};

/// Current manifest layout
pub const MANIFEST_FORMAT_VERSION: u32 = 1;

/// A version table as exchanged on disk
#[derive(Debug, Clone, Serialize)]
pub struct TableManifest {
    pub format_version: u32,
    /// When the manifest was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    /// Fingerprint of `versions`, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<Checksum>,
    pub stats: ManifestStats,
    pub versions: Vec<VersionEntry>,
}

/// Statistics about a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestStats {
    pub total_versions: usize,
    pub release_versions: usize,
    pub distinct_protocols: usize,
    pub release_protocols: usize,
}

impl ManifestStats {
    fn of(registry: &VersionRegistry) -> Self {
        Self {
            total_versions: registry.table().len(),
            release_versions: registry.releases().len(),
            distinct_protocols: registry.supported_protocols().len(),
            release_protocols: registry.release_protocols().len(),
        }
    }
}

/// Manifest as read from disk, before validation
#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default = "default_format_version")]
    format_version: u32,
    #[serde(default)]
    exported_at: Option<DateTime<Utc>>,
    #[serde(default)]
    checksum: Option<Checksum>,
    versions: Vec<RawEntry>,
}

/// Protocols are kept as raw JSON so bad values surface as validation errors
#[derive(Debug, Deserialize)]
struct RawEntry {
    id: String,
    protocol: serde_json::Value,
}

fn default_format_version() -> u32 {
    MANIFEST_FORMAT_VERSION
}

impl TableManifest {
    /// Snapshot a registry, stamped with the current time
    pub fn from_registry(registry: &VersionRegistry) -> Self {
        Self {
            format_version: MANIFEST_FORMAT_VERSION,
            exported_at: Some(Utc::now()),
            checksum: Some(registry.fingerprint()),
            stats: ManifestStats::of(registry),
            versions: registry.all_versions().cloned().collect(),
        }
    }

    /// Parse and validate a manifest.
    ///
    /// With `verify_checksum`, a manifest carrying a checksum must match it.
    pub fn parse(content: &str, verify_checksum: bool) -> Result<Self> {
        let raw: RawManifest = serde_json::from_str(content)?;

        if raw.format_version != MANIFEST_FORMAT_VERSION {
            return Err(RegistryError::InvalidVersion(format!(
                "unsupported manifest format {}",
                raw.format_version
            )));
        }

        let versions = raw
            .versions
            .into_iter()
            .map(|e| {
                let protocol = protocol_from_value(&e.id, &e.protocol)?;
                Ok(VersionEntry::new(e.id, protocol))
            })
            .collect::<Result<Vec<_>>>()?;

        // Validate before building the registry used for stats
        let registry = VersionRegistry::new(VersionTable::from_entries(versions)?);

        if verify_checksum {
            if let Some(expected) = &raw.checksum {
                if !expected.verify(registry.all_versions()) {
                    return Err(RegistryError::ChecksumMismatch {
                        expected: expected.to_string(),
                        actual: registry.fingerprint().to_string(),
                    });
                }
            }
        }

        Ok(Self {
            format_version: raw.format_version,
            exported_at: raw.exported_at,
            checksum: raw.checksum,
            stats: ManifestStats::of(&registry),
            versions: registry.all_versions().cloned().collect(),
        })
    }

    /// Read and parse a manifest file
    pub fn read(path: impl AsRef<std::path::Path>, verify_checksum: bool) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, verify_checksum)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest as pretty JSON
    pub fn write(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Build a registry from the manifest's entries
    pub fn into_registry(self) -> Result<VersionRegistry> {
        VersionRegistry::from_entries(self.versions)
    }
}

fn protocol_from_value(id: &str, value: &serde_json::Value) -> Result<u32> {
    let invalid = |reason: String| RegistryError::InvalidProtocol {
        id: id.to_string(),
        reason,
    };

    match value {
        serde_json::Value::Number(n) => {
            if let Some(p) = n.as_u64() {
                u32::try_from(p).map_err(|_| invalid(format!("{} is out of range", p)))
            } else if let Some(p) = n.as_i64() {
                Err(invalid(format!("{} is negative", p)))
            } else {
                Err(invalid(format!("{} is not an integer", n)))
            }
        }
        other => Err(invalid(format!("expected an integer, got {}", other))),
    }
}
