//! On-disk layout of the kubeversion state directory.
//!
//! ```text
//! ~/.kubeversion/
//!   config.toml
//!   versions/kubectl-v1.29.0
//!   bin/kubectl -> ~/.kubeversion/versions/kubectl-v1.29.0
//! ```

use crate::{CONFIG_FILENAME, TOOL_DIR_NAME};
use directories::BaseDirs;
use kv_core::{EnvVars, Error, Result};
use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

/// Name of the managed binary.
pub const BINARY_NAME: &str = "kubectl";

/// Prefix of artifact filenames in the version store.
pub const ARTIFACT_PREFIX: &str = "kubectl-";

/// Resolved locations used by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// Create a layout rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the layout from `KUBEVERSION_HOME` or the user's home directory.
    pub fn discover() -> Result<Self> {
        if let Some(root) = std::env::var_os(EnvVars::KUBEVERSION_HOME)
            && !root.is_empty()
        {
            return Self::anchored(PathBuf::from(root));
        }

        let dirs = BaseDirs::new().ok_or_else(Error::home_unavailable)?;
        Ok(Self::new(dirs.home_dir().join(TOOL_DIR_NAME)))
    }

    /// Anchor a relative root at the current directory, so links created
    /// under it resolve from anywhere.
    fn anchored(root: PathBuf) -> Result<Self> {
        let absolute = std::path::absolute(&root)
            .map_err(|e| Error::io("failed to resolve kubeversion home", &root, e))?;
        Ok(Self::new(absolute))
    }

    /// The state directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The version store.
    pub fn versions_dir(&self) -> PathBuf {
        self.root.join("versions")
    }

    /// The directory users add to their `PATH`.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// The stable binary path, a symlink into the version store.
    pub fn stable_binary(&self) -> PathBuf {
        self.bin_dir().join(format!("{BINARY_NAME}{EXE_SUFFIX}"))
    }

    /// Default location of `config.toml`.
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILENAME)
    }

    /// Path of the artifact for a canonical version.
    pub fn artifact_path(&self, version: &str) -> PathBuf {
        self.versions_dir().join(artifact_name(version))
    }

    /// Hidden path a download is staged at before it is renamed into place.
    ///
    /// Keyed by process so concurrent installs of one version never share it.
    pub fn partial_path(&self, version: &str) -> PathBuf {
        self.versions_dir().join(format!(
            ".{}.{}.part",
            artifact_name(version),
            std::process::id()
        ))
    }
}

/// Artifact filename for a canonical version, e.g. `kubectl-v1.29.0`.
pub fn artifact_name(version: &str) -> String {
    format!("{ARTIFACT_PREFIX}{version}{EXE_SUFFIX}")
}

/// Recover the version from an artifact filename.
///
/// Returns `None` for anything that is not a `kubectl-<version>` file.
pub fn version_from_artifact(file_name: &str) -> Option<&str> {
    let version = file_name.strip_prefix(ARTIFACT_PREFIX)?;
    let version = version.strip_suffix(EXE_SUFFIX).unwrap_or(version);
    (!version.is_empty()).then_some(version)
}
