//! Canonical kubectl version tags.
//!
//! Every version handled internally carries the `v` marker. Raw strings
//! from the command line, the release catalog and artifact filenames are
//! normalized once on the way in.

use kv_core::Version;
use std::cmp::Ordering;
use std::fmt;

/// Marker every canonical tag starts with.
pub const TAG_MARKER: char = 'v';

/// A canonical version identifier such as `v1.29.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTag(String);

impl VersionTag {
    /// Canonicalize a raw version string by prepending the marker if absent.
    ///
    /// The remainder is not validated; a malformed tag fails later when no
    /// artifact matches it.
    pub fn normalize(raw: &str) -> Self {
        if raw.starts_with(TAG_MARKER) {
            Self(raw.to_string())
        } else {
            Self(format!("{TAG_MARKER}{raw}"))
        }
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The semantic version after the marker, if it parses.
    pub fn semver(&self) -> Option<Version> {
        self.0.strip_prefix(TAG_MARKER)?.parse().ok()
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalize a raw version string.
pub fn normalize(raw: &str) -> VersionTag {
    VersionTag::normalize(raw)
}

/// Sort tags newest first.
///
/// Tags that parse as semantic versions are ordered by version, so
/// `v1.10.0` comes before `v1.9.0`. Anything else sorts after them in
/// reverse lexicographic order.
pub fn sort_newest_first(versions: &mut [VersionTag]) {
    versions.sort_by(compare_newest_first);
}

fn compare_newest_first(a: &VersionTag, b: &VersionTag) -> Ordering {
    match (a.semver(), b.semver()) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| b.0.cmp(&a.0)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.0.cmp(&a.0),
    }
}
