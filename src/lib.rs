//! Craft Version Registry
//!
//! The static mapping from Minecraft version ids to the wire protocol number
//! each one speaks, plus the views protocol code needs on top of it.
//!
//! ## Features
//!
//! - **Version Table**: Hand-maintained, ordered, key-unique `(id, protocol)` entries
//! - **Release Classification**: Numbered releases (`1.14.4`) versus snapshots
//!   and pre-releases (`18w30a`, `1.13-pre2`)
//! - **Protocol Sequences**: Distinct protocol numbers, ascending, for the full
//!   table and for releases only
//! - **Manifests**: JSON export/import of the table with SHA256 fingerprints
//! - **Hot Replacement**: `SharedRegistry` swaps a whole registry atomically
//!
//! ## Architecture
//!
//! ```text
//! VersionTable (built-in or manifest)
//!   ├── is_release filter ──> release VersionTable
//!   │                           └── ProtocolSequence (release protocols)
//!   └── ProtocolSequence (supported protocols)
//!            │
//!            └── VersionRegistry ──> SharedRegistry
//! ```

pub mod checksum;
pub mod config;
pub mod data;
pub mod error;
pub mod manifest;
pub mod protocols;
pub mod registry;
pub mod release;
pub mod table;
pub mod version;

pub use checksum::Checksum;
pub use config::VersionsConfig;
pub use error::{RegistryError, Result};
pub use manifest::TableManifest;
pub use protocols::ProtocolSequence;
pub use registry::{SharedRegistry, VersionRegistry};
pub use release::is_release;
pub use table::{VersionEntry, VersionTable};
pub use version::ReleaseVersion;
