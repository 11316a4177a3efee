//! Release classification
//!
//! A release id is made of decimal digit groups joined by dots, with at least
//! one dot: `1.8`, `1.12.2`, `1.14.4`. Snapshots (`18w30a`), pre-releases
//! (`1.13-pre2`, `1.14 Pre-Release 1`) and bare numbers (`18`) are not releases.

use regex::Regex;
use std::sync::OnceLock;

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
const RELEASE_PATTERN: &str = r"^[0-9]+(\.[0-9]+)+$";

fn release_regex() -> &'static Regex {
    static RELEASE_RE: OnceLock<Regex> = OnceLock::new();
    RELEASE_RE.get_or_init(|| {
        // The pattern is a literal; it cannot fail to compile.
        Regex::new(RELEASE_PATTERN).unwrap()
    })
}

/// Whether `id` names a numbered release.
///
/// The whole string must match; there is no failure mode, anything that is
/// not a dotted group of digits is simply not a release.
pub fn is_release(id: &str) -> bool {
    release_regex().is_match(id)
}

/// Split a release id into its numeric groups.
///
/// Returns `None` for ids that are not releases, or whose groups overflow `u64`.
pub fn release_components(id: &str) -> Option<Vec<u64>> {
    if !is_release(id) {
        return None;
    }
    id.split('.').map(|part| part.parse().ok()).collect()
}
