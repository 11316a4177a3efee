//! Registry Property Tests
//!
//! Checks the built-in registry against the properties protocol code relies on.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use craft_versions::data::BUILTIN_VERSIONS;
use craft_versions::{
    is_release, Checksum, ProtocolSequence, RegistryError, SharedRegistry, TableManifest, VersionEntry,
    VersionRegistry, VersionTable,
};

fn registry() -> VersionRegistry {
    VersionRegistry::builtin().expect("built-in table is valid")
}

fn assert_strictly_ascending(seq: &ProtocolSequence) {
    for pair in seq.as_slice().windows(2) {
        assert!(pair[0] < pair[1], "{} is not below {}", pair[0], pair[1]);
    }
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn test_every_entry_looks_up_its_protocol() {
    let registry = registry();
    for &(id, protocol) in BUILTIN_VERSIONS {
        assert_eq!(registry.lookup_protocol(id).unwrap(), protocol, "{}", id);
        assert!(registry.is_supported(id));
    }
}

#[test]
fn test_known_protocols() {
    let registry = registry();
    assert_eq!(registry.lookup_protocol("1.8").unwrap(), 47);
    assert_eq!(registry.lookup_protocol("1.14.4").unwrap(), 498);
    assert_eq!(registry.lookup_protocol("1.12.2").unwrap(), 340);
    assert_eq!(registry.lookup_protocol("1.14 Pre-Release 1").unwrap(), 472);
}

#[test]
fn test_unknown_version_is_recoverable() {
    let registry = registry();
    match registry.lookup_protocol("nonexistent") {
        Err(RegistryError::NotFound { id, .. }) => assert_eq!(id, "nonexistent"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
    // Registry is still usable after a miss
    assert_eq!(registry.lookup_protocol("1.8").unwrap(), 47);
}

#[test]
fn test_pending_versions_not_supported() {
    let registry = registry();
    assert!(!registry.is_supported("1.15"));
    assert!(!registry.is_supported("1.15.1"));
    assert!(!registry.supports_protocol(573));
}

// =============================================================================
// Release Classification
// =============================================================================

#[test]
fn test_release_classifier_cases() {
    assert!(is_release("1.12.2"));
    assert!(!is_release("1.12.2-pre2"));
    assert!(!is_release("18w30a"));
    assert!(!is_release("18"));
    assert!(!is_release("1.14 Pre-Release 2"));
}

#[test]
fn test_release_table_is_subset_of_raw_table() {
    let registry = registry();
    for entry in registry.release_versions() {
        assert!(is_release(&entry.id));
        assert_eq!(registry.lookup_protocol(&entry.id).unwrap(), entry.protocol);
    }
}

#[test]
fn test_release_table_complete() {
    let registry = registry();
    let releases: HashSet<&str> = registry.release_versions().map(|e| e.id.as_str()).collect();
    for entry in registry.all_versions() {
        assert_eq!(releases.contains(entry.id.as_str()), is_release(&entry.id), "{}", entry.id);
    }
}

#[test]
fn test_release_order_follows_table_order() {
    let registry = registry();
    let expected: Vec<&VersionEntry> = registry.all_versions().filter(|e| e.is_release()).collect();
    let actual: Vec<&VersionEntry> = registry.release_versions().collect();
    assert_eq!(actual, expected);
    assert_eq!(actual.first().map(|e| e.id.as_str()), Some("1.8"));
    assert_eq!(actual.last().map(|e| e.id.as_str()), Some("1.14.4"));
}

// =============================================================================
// Protocol Sequences
// =============================================================================

#[test]
fn test_sequences_strictly_ascending() {
    let registry = registry();
    assert_strictly_ascending(registry.supported_protocols());
    assert_strictly_ascending(registry.release_protocols());
}

#[test]
fn test_sequences_cover_table_values() {
    let registry = registry();
    let all: HashSet<u32> = registry.all_versions().map(|e| e.protocol).collect();
    let seq: HashSet<u32> = registry.supported_protocols().iter().collect();
    assert_eq!(all, seq);

    let releases: HashSet<u32> = registry.release_versions().map(|e| e.protocol).collect();
    let release_seq: HashSet<u32> = registry.release_protocols().iter().collect();
    assert_eq!(releases, release_seq);
}

#[test]
fn test_release_protocols_subset_of_supported() {
    let registry = registry();
    assert!(registry.release_protocols().is_subset_of(registry.supported_protocols()));
    assert!(registry.release_protocols().len() < registry.supported_protocols().len());
}

#[test]
fn test_release_protocol_values() {
    let registry = registry();
    assert_eq!(
        registry.release_protocols().as_slice(),
        &[47, 107, 108, 109, 110, 210, 315, 316, 335, 338, 340, 393, 401, 404, 477, 480, 485, 490, 498]
    );
}

// =============================================================================
// Idempotence and Concurrency
// =============================================================================

#[test]
fn test_accessors_are_idempotent() {
    let registry = registry();
    assert_eq!(registry.supported_protocols(), registry.supported_protocols());
    assert_eq!(registry.release_protocols(), registry.release_protocols());

    let first: Vec<_> = registry.all_versions().collect();
    let second: Vec<_> = registry.all_versions().collect();
    assert_eq!(first, second);

    let first: Vec<_> = registry.release_versions().collect();
    let second: Vec<_> = registry.release_versions().collect();
    assert_eq!(first, second);

    assert_eq!(registry.fingerprint(), registry.fingerprint());
}

#[test]
fn test_concurrent_readers() {
    let registry = Arc::new(registry());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for &(id, protocol) in BUILTIN_VERSIONS {
                    assert_eq!(registry.lookup_protocol(id).unwrap(), protocol);
                }
                registry.supported_protocols().len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), registry.supported_protocols().len());
    }
}

#[test]
fn test_shared_registry_readers_see_whole_registry() {
    let shared = Arc::new(SharedRegistry::new(registry()));
    let builtin_fingerprint = shared.load().fingerprint();

    let replacement = VersionRegistry::from_entries(vec![
        VersionEntry::new("1.15", 573),
        VersionEntry::new("1.15.1", 575),
    ])
    .unwrap();
    let replacement_fingerprint = replacement.fingerprint();

    let reader = {
        let shared = Arc::clone(&shared);
        let known: [Checksum; 2] = [builtin_fingerprint.clone(), replacement_fingerprint.clone()];
        thread::spawn(move || {
            for _ in 0..1000 {
                let snapshot = shared.load();
                // Never a mix of old and new
                assert!(known.contains(&snapshot.fingerprint()));
                assert!(snapshot.release_protocols().is_subset_of(snapshot.supported_protocols()));
            }
        })
    };

    shared.replace(replacement);
    reader.join().unwrap();

    let current = shared.load();
    assert_eq!(current.fingerprint(), replacement_fingerprint);
    assert_ne!(current.fingerprint(), builtin_fingerprint);
}

// =============================================================================
// Construction Failures
// =============================================================================

#[test]
fn test_duplicate_key_fails_construction() {
    let err = VersionTable::from_pairs(&[("1.8", 47), ("1.8.1", 47), ("1.8", 47)]).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, RegistryError::DuplicateVersion { ref id } if id == "1.8"));
}

#[test]
fn test_manifest_with_negative_protocol_fails() {
    let json = r#"{ "format_version": 1, "versions": [
        { "id": "1.8", "protocol": 47 },
        { "id": "1.9", "protocol": -107 }
    ] }"#;
    let err = TableManifest::parse(json, true).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_manifest_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("versions.json");

    let registry = registry();
    TableManifest::from_registry(&registry).write(&path).unwrap();

    let reloaded = TableManifest::read(&path, true).unwrap().into_registry().unwrap();
    assert_eq!(reloaded.fingerprint(), registry.fingerprint());
    assert_eq!(reloaded.supported_protocols(), registry.supported_protocols());
    assert_eq!(reloaded.release_protocols(), registry.release_protocols());
}
