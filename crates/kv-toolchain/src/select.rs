//! Version selection.
//!
//! The orchestrator builds an annotated candidate list and hands it to a
//! [`VersionSelector`]. The terminal prompt lives in the CLI; tests script
//! the choice.

use crate::activate::ActiveState;
use crate::version::{VersionTag, sort_newest_first};
use kv_core::Result;
use std::collections::HashSet;
use std::fmt;

/// One entry of the selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub version: VersionTag,
    pub installed: bool,
    pub active: bool,
}

impl Candidate {
    /// Display label, e.g. `v1.29.0 (installed)`.
    pub fn label(&self) -> String {
        if self.active {
            format!("{} (active)", self.version)
        } else if self.installed {
            format!("{} (installed)", self.version)
        } else {
            self.version.to_string()
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Outcome of a selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(VersionTag),
    /// The user backed out. Not an error.
    Cancelled,
}

/// Something that can pick one version out of a candidate list.
pub trait VersionSelector {
    fn select(&self, candidates: &[Candidate]) -> Result<Selection>;
}

/// Merge the remote catalog with the local inventory.
///
/// Installed versions missing from the remote page (older releases, or
/// tags the catalog no longer lists) are kept so they stay selectable.
pub fn merge_candidates(
    remote: Vec<VersionTag>,
    installed: &HashSet<VersionTag>,
    active: &ActiveState,
) -> Vec<Candidate> {
    let mut versions = remote;
    let seen: HashSet<VersionTag> = versions.iter().cloned().collect();
    versions.extend(installed.iter().filter(|v| !seen.contains(*v)).cloned());
    sort_newest_first(&mut versions);
    versions.dedup();

    versions
        .into_iter()
        .map(|version| Candidate {
            installed: installed.contains(&version),
            active: active.is_active(&version),
            version,
        })
        .collect()
}
