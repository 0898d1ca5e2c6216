//! User settings.
//!
//! Settings are stored at `~/.kubeversion/config.toml` and every field is
//! optional.
//!
//! # Example
//!
//! ```toml
//! [remote]
//! releases_url = "https://api.github.com/repos/kubernetes/kubernetes/releases?per_page=100"
//! download_url = "https://dl.k8s.io/release"
//! timeout = 300
//!
//! [list]
//! page_size = 10
//! ```

use kv_core::EnvVars;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Upstream release catalog.
pub const DEFAULT_RELEASES_URL: &str =
    "https://api.github.com/repos/kubernetes/kubernetes/releases?per_page=100";

/// Base URL kubectl binaries are downloaded from.
pub const DEFAULT_DOWNLOAD_URL: &str = "https://dl.k8s.io/release";

/// Error type for settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Remote endpoints and transport limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// URL of the JSON release list.
    pub releases_url: String,
    /// Base URL for `{version}/bin/{os}/{arch}/kubectl`.
    pub download_url: String,
    /// Overall HTTP timeout in seconds.
    pub timeout: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            releases_url: DEFAULT_RELEASES_URL.to_string(),
            download_url: DEFAULT_DOWNLOAD_URL.to_string(),
            timeout: 300,
        }
    }
}

/// Interactive list settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    /// Number of rows shown at once by the version picker.
    pub page_size: usize,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

/// All user settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub remote: RemoteSettings,

    #[serde(default)]
    pub list: ListSettings,
}

impl Settings {
    /// Parse settings from a TOML string.
    pub fn parse(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse settings from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            debug!("Config file does not exist: {}", path.display());
            return Ok(Self::default());
        }

        debug!("Loading config from: {}", path.display());
        Self::from_file(path)
    }

    /// Apply `KUBEVERSION_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(EnvVars::KUBEVERSION_RELEASES_URL).filter(|v| !v.is_empty()) {
            debug!(%url, "Overriding releases URL from environment");
            self.remote.releases_url = url;
        }
        if let Some(url) = lookup(EnvVars::KUBEVERSION_DOWNLOAD_URL).filter(|v| !v.is_empty()) {
            debug!(%url, "Overriding download URL from environment");
            self.remote.download_url = url;
        }
    }
}
