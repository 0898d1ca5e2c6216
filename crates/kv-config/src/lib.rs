//! Configuration for kubeversion.
//!
//! This crate handles:
//! - Resolving the on-disk layout (`~/.kubeversion`) once per invocation
//! - Parsing the optional `config.toml`
//! - Applying environment overrides

pub mod layout;
pub mod settings;

pub use layout::{ARTIFACT_PREFIX, BINARY_NAME, Layout, artifact_name, version_from_artifact};
pub use settings::{
    DEFAULT_DOWNLOAD_URL, DEFAULT_RELEASES_URL, ListSettings, RemoteSettings, Settings,
    SettingsError,
};

use kv_core::{Error, Fix, Result};
use std::path::Path;
use tracing::debug;

/// The kubeversion state directory name under the home directory.
pub const TOOL_DIR_NAME: &str = ".kubeversion";

/// The configuration filename inside the state directory.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Fully resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved on-disk locations.
    pub layout: Layout,
    /// Settings from `config.toml` with environment overrides applied.
    pub settings: Settings,
}

impl Config {
    /// Resolve the layout and load settings.
    ///
    /// `config_file` overrides the default `<root>/config.toml` location.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let layout = Layout::discover()?;
        let path = config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| layout.config_file());

        let mut settings = Settings::load(&path).map_err(|e| Error::Config {
            message: e.to_string(),
            path: Some(path.clone()),
            source: Some(Box::new(e)),
            fixes: vec![Fix::new(format!(
                "Fix or remove the configuration file at {}",
                path.display()
            ))],
        })?;
        settings.apply_env();

        debug!(root = %layout.root().display(), "Resolved kubeversion layout");
        Ok(Self { layout, settings })
    }
}
