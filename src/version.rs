//! Release version parsing and ordering

use semver::{Version, VersionReq};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{RegistryError, Result};
use crate::release::release_components;

/// A parsed release id such as `1.14.4`
#[derive(Debug, Clone)]
pub struct ReleaseVersion {
    /// The id as it appears in the table
    id: String,
    /// Numeric groups, left to right
    components: Vec<u64>,
}

impl ReleaseVersion {
    /// Parse a release id; snapshots and pre-releases are rejected
    pub fn parse(id: &str) -> Result<Self> {
        let components = release_components(id)
            .ok_or_else(|| RegistryError::InvalidVersion(id.to_string()))?;
        Ok(Self {
            id: id.to_string(),
            components,
        })
    }

    pub fn major(&self) -> u64 {
        self.component(0)
    }

    pub fn minor(&self) -> u64 {
        self.component(1)
    }

    pub fn patch(&self) -> u64 {
        self.component(2)
    }

    fn component(&self, i: usize) -> u64 {
        self.components.get(i).copied().unwrap_or(0)
    }

    /// Map onto `major.minor.patch`, filling missing groups with 0.
    ///
    /// Ids with more than three groups have no semver form.
    pub fn to_semver(&self) -> Option<Version> {
        if self.components.len() > 3 {
            return None;
        }
        Some(Version::new(self.major(), self.minor(), self.patch()))
    }

    /// Whether this release falls within a semver requirement
    pub fn matches(&self, req: &VersionReq) -> bool {
        self.to_semver().map(|v| req.matches(&v)).unwrap_or(false)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

// `1.8` and `1.8.0` compare equal: trailing zero groups are insignificant.
impl PartialEq for ReleaseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ReleaseVersion {}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parsing() {
        let v = ReleaseVersion::parse("1.14.4").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 14, 4));
        assert_eq!(v.to_string(), "1.14.4");
        assert_eq!(v.to_semver(), Some(Version::new(1, 14, 4)));
    }

    #[test]
    fn test_short_version_pads() {
        let v = ReleaseVersion::parse("1.8").unwrap();
        assert_eq!(v.patch(), 0);
        assert_eq!(v.to_semver(), Some(Version::new(1, 8, 0)));
    }

    #[test]
    fn test_non_release_rejected() {
        assert!(matches!(
            ReleaseVersion::parse("1.13-pre2"),
            Err(RegistryError::InvalidVersion(_))
        ));
        assert!(ReleaseVersion::parse("18w30a").is_err());
        assert!(ReleaseVersion::parse("18").is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        let v1_9 = ReleaseVersion::parse("1.9").unwrap();
        let v1_10 = ReleaseVersion::parse("1.10").unwrap();
        let v1_9_4 = ReleaseVersion::parse("1.9.4").unwrap();
        assert!(v1_9 < v1_9_4);
        assert!(v1_9_4 < v1_10);
        assert_eq!(
            ReleaseVersion::parse("1.8").unwrap(),
            ReleaseVersion::parse("1.8.0").unwrap()
        );
    }

    #[test]
    fn test_requirement_matching() {
        let req = VersionReq::parse(">=1.12, <1.13").unwrap();
        assert!(ReleaseVersion::parse("1.12").unwrap().matches(&req));
        assert!(ReleaseVersion::parse("1.12.2").unwrap().matches(&req));
        assert!(!ReleaseVersion::parse("1.13").unwrap().matches(&req));
        assert!(!ReleaseVersion::parse("1.12.2.1").unwrap().matches(&req));
    }
}
