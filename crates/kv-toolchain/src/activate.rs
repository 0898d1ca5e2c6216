//! kubectl version activation.
//!
//! The active version is nothing more than the target of the stable
//! symlink at `~/.kubeversion/bin/kubectl`. Activation repoints it.

use crate::inventory::is_installed;
use crate::version::VersionTag;
use kv_config::{Layout, version_from_artifact};
use kv_core::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What the stable binary path currently resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveState {
    /// Nothing usable at the stable path.
    NoActiveVersion,
    /// The stable path links to this version's artifact.
    ActiveVersion(VersionTag),
}

impl ActiveState {
    /// The active version, if any.
    pub fn version(&self) -> Option<&VersionTag> {
        match self {
            ActiveState::NoActiveVersion => None,
            ActiveState::ActiveVersion(version) => Some(version),
        }
    }

    pub fn is_active(&self, version: &VersionTag) -> bool {
        self.version() == Some(version)
    }
}

/// A completed activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// The version now active.
    pub version: VersionTag,
    /// The stable binary path.
    pub link: PathBuf,
    /// The artifact it points at.
    pub target: PathBuf,
    /// What was active before.
    pub previous: ActiveState,
}

impl Activation {
    /// Whether the version was already active before this call.
    pub fn was_noop(&self) -> bool {
        self.previous.is_active(&self.version)
    }
}

/// Read the stable symlink back into an [`ActiveState`].
pub fn active_version(layout: &Layout) -> ActiveState {
    let link = layout.stable_binary();
    let Ok(target) = fs::read_link(&link) else {
        return ActiveState::NoActiveVersion;
    };

    let target = if target.is_relative() {
        layout.bin_dir().join(target)
    } else {
        target
    };
    if !target.is_file() {
        debug!("Stable binary points at missing {}", target.display());
        return ActiveState::NoActiveVersion;
    }

    target
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(version_from_artifact)
        .map(|version| ActiveState::ActiveVersion(VersionTag::normalize(version)))
        .unwrap_or(ActiveState::NoActiveVersion)
}

/// Point the stable binary at the installed artifact for `version`.
///
/// Fails with [`Error::VersionNotInstalled`] before touching anything when
/// the artifact is missing. Whatever occupies the stable path (a stale
/// symlink, a regular file, a directory) is replaced.
pub fn activate(layout: &Layout, version: &VersionTag) -> Result<Activation> {
    if !is_installed(layout, version) {
        return Err(Error::not_installed(version.as_str()));
    }
    let artifact = layout.artifact_path(version.as_str());
    // The link is read from bin/, so a relative target would dangle.
    let target = std::path::absolute(&artifact)
        .map_err(|e| Error::io("failed to resolve kubectl artifact", &artifact, e))?;

    let bin_dir = layout.bin_dir();
    fs::create_dir_all(&bin_dir).map_err(|e| Error::directory_create("bin", &bin_dir, e))?;

    let link = layout.stable_binary();
    let previous = active_version(layout);
    replace_link(&target, &link)?;

    info!("Activated kubectl {} ({})", version, target.display());
    Ok(Activation {
        version: version.clone(),
        link,
        target,
        previous,
    })
}

/// Create the new link beside the stable path, then rename it over.
///
/// Rename replaces an existing link or file in one step, so the stable path
/// is never left empty. A directory cannot be renamed over and is removed
/// first.
fn replace_link(target: &Path, link: &Path) -> Result<()> {
    let staged = staged_path(link);
    match fs::symlink_metadata(&staged) {
        Ok(_) => remove_entry(&staged)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io("failed to inspect staged link", &staged, e)),
    }

    symlink(target, &staged).map_err(|e| Error::SymlinkCreate {
        link: staged.clone(),
        target: target.to_path_buf(),
        source: e,
    })?;

    if fs::symlink_metadata(link).is_ok_and(|meta| meta.is_dir()) {
        debug!("Removing directory at stable path {}", link.display());
        if let Err(e) = remove_entry(link) {
            let _ = fs::remove_file(&staged);
            return Err(e);
        }
    }

    fs::rename(&staged, link).map_err(|e| {
        let _ = fs::remove_file(&staged);
        Error::SymlinkCreate {
            link: link.to_path_buf(),
            target: target.to_path_buf(),
            source: e,
        }
    })?;

    debug!("Linked {} -> {}", link.display(), target.display());
    Ok(())
}

fn staged_path(link: &Path) -> PathBuf {
    let name = link
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    link.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

fn remove_entry(path: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(path)
        .map_err(|e| Error::io("failed to inspect existing kubectl", path, e))?;
    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| Error::io("failed to remove existing kubectl", path, e))
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

// Needs Developer Mode or an elevated shell.
#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
