//! Installed kubectl versions.
//!
//! Installed versions are not recorded anywhere; they are derived from the
//! `kubectl-<version>` filenames in the version store.

use crate::version::VersionTag;
use kv_config::{Layout, version_from_artifact};
use kv_core::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use tracing::debug;

/// Scan the version store for installed versions.
///
/// A missing store is a fresh install and yields an empty set.
pub fn installed_versions(layout: &Layout) -> Result<HashSet<VersionTag>> {
    let dir = layout.versions_dir();
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Version store does not exist yet: {}", dir.display());
            return Ok(HashSet::new());
        }
        Err(e) => return Err(Error::io("failed to read versions directory", &dir, e)),
    };

    let mut installed = HashSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io("failed to read versions directory", &dir, e))?;
        // Same test as is_installed, so a directory named like an artifact is skipped
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if let Some(version) = version_from_artifact(name) {
            installed.insert(VersionTag::normalize(version));
        }
    }

    debug!("Found {} installed versions", installed.len());
    Ok(installed)
}

/// Whether an artifact for `version` exists in the version store.
pub fn is_installed(layout: &Layout, version: &VersionTag) -> bool {
    layout.artifact_path(version.as_str()).is_file()
}
