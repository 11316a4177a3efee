//! Configuration management for the version registry
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (craft-versions.toml)
//! - Environment variables (CRAFT_VERSIONS__*)
//!
//! ## Example config file (craft-versions.toml):
//! ```toml
//! [table]
//! path = "./versions.json"
//! verify_checksum = true
//!
//! [client]
//! target_version = "1.12.2"
//! releases_only = true
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{RegistryError, Result};
use crate::manifest::TableManifest;
use crate::registry::VersionRegistry;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionsConfig {
    /// Version table source
    #[serde(default)]
    pub table: TableConfig,

    /// Client-side version selection
    #[serde(default)]
    pub client: ClientConfig,
}

/// Where the version table comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// External manifest replacing the built-in table
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Reject manifests whose checksum does not match
    #[serde(default = "default_true")]
    pub verify_checksum: bool,
}

/// Version the client should speak
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Version id advertised in the handshake
    #[serde(default)]
    pub target_version: Option<String>,

    /// Refuse snapshot and pre-release targets
    #[serde(default)]
    pub releases_only: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            path: None,
            verify_checksum: true,
        }
    }
}

impl VersionsConfig {
    /// Load configuration from default locations
    pub fn load() -> std::result::Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> std::result::Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = [
            "craft-versions.toml",
            ".craft-versions.toml",
            "config/craft-versions.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "craft", "craft-versions") {
            let xdg_config = config_dir.config_dir().join("craft-versions.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Environment variables (CRAFT_VERSIONS__*). Values stay strings:
        // parsing would read `1.10` as the float 1.1.
        builder = builder.add_source(Environment::with_prefix("CRAFT_VERSIONS").separator("__"));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the registry this configuration points at
    pub fn open_registry(&self) -> Result<VersionRegistry> {
        match &self.table.path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading version table manifest");
                TableManifest::read(path, self.table.verify_checksum)?.into_registry()
            }
            None => VersionRegistry::builtin(),
        }
    }

    /// Protocol for the configured target version, if one is set
    pub fn resolve_target(&self, registry: &VersionRegistry) -> Result<Option<u32>> {
        let Some(target) = self.client.target_version.as_deref() else {
            return Ok(None);
        };

        let protocol = registry.lookup_protocol(target)?;
        if self.client.releases_only && !registry.is_supported_release(target) {
            return Err(RegistryError::NotARelease {
                id: target.to_string(),
            });
        }
        Ok(Some(protocol))
    }
}
