//! Error types for the version registry

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Version registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Duplicate version id: {id}")]
    DuplicateVersion { id: String },

    #[error("Invalid protocol for version {id}: {reason}")]
    InvalidProtocol { id: String, reason: String },

    #[error("Invalid version id: {reason}")]
    InvalidVersionId { reason: String },

    #[error("Version not found: {}{}", .id, suggestion_hint(.suggestion))]
    NotFound {
        id: String,
        suggestion: Option<String>,
    },

    #[error("Version {id} is not a release")]
    NotARelease { id: String },

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Semver error: {0}")]
    Semver(#[from] semver::Error),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl RegistryError {
    /// True for errors raised while constructing a table from bad data.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RegistryError::DuplicateVersion { .. }
                | RegistryError::InvalidProtocol { .. }
                | RegistryError::InvalidVersionId { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean {}?)", s),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_includes_suggestion() {
        let err = RegistryError::NotFound {
            id: "1.14.5".to_string(),
            suggestion: Some("1.14.4".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Version not found: 1.14.5 (did you mean 1.14.4?)"
        );

        let err = RegistryError::NotFound {
            id: "zzz".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Version not found: zzz");
    }

    #[test]
    fn test_error_classification() {
        let dup = RegistryError::DuplicateVersion { id: "1.8".to_string() };
        assert!(dup.is_validation());
        assert!(!dup.is_not_found());

        let missing = RegistryError::NotFound { id: "x".to_string(), suggestion: None };
        assert!(missing.is_not_found());
        assert!(!missing.is_validation());
    }
}
