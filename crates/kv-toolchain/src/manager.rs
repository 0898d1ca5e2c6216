//! The user-facing operations: install, use and interactive selection.

use crate::activate::{ActiveState, Activation, activate, active_version};
use crate::advisor::{PathAdvice, advise};
use crate::fetch::Fetcher;
use crate::install::{InstallOptions, InstallResult, install_version};
use crate::inventory::installed_versions;
use crate::remote::fetch_available_versions;
use crate::select::{Selection, VersionSelector, merge_candidates};
use crate::version::{VersionTag, sort_newest_first};
use kv_config::{DEFAULT_RELEASES_URL, Layout};
use kv_core::Result;
use kv_ui::Spinner;
use std::ffi::OsString;
use tracing::{debug, info};

/// Result of switching versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseOutcome {
    pub activation: Activation,
    /// Present when the bin directory is missing from `PATH`.
    pub path_advice: Option<PathAdvice>,
}

/// Result of an interactive selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The user backed out; nothing changed.
    Cancelled,
    /// The chosen version is now active. `installed` is set when it had to
    /// be downloaded first.
    Switched {
        installed: Option<InstallResult>,
        outcome: UseOutcome,
    },
}

/// Ties the version store, the network and the active link together.
///
/// Everything environmental (paths, URLs, the search path) is resolved by
/// the caller and passed in once.
pub struct VersionManager<F: Fetcher> {
    layout: Layout,
    fetcher: F,
    releases_url: String,
    install_options: InstallOptions,
    search_path: Option<OsString>,
}

impl<F: Fetcher> VersionManager<F> {
    pub fn new(layout: Layout, fetcher: F) -> Self {
        Self {
            layout,
            fetcher,
            releases_url: DEFAULT_RELEASES_URL.to_string(),
            install_options: InstallOptions::default(),
            search_path: None,
        }
    }

    pub fn with_releases_url(mut self, url: impl Into<String>) -> Self {
        self.releases_url = url.into();
        self
    }

    pub fn with_install_options(mut self, options: InstallOptions) -> Self {
        self.install_options = options;
        self
    }

    /// The `PATH` value checked by the environment advisor.
    pub fn with_search_path(mut self, search_path: Option<OsString>) -> Self {
        self.search_path = search_path;
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Download a version into the store, replacing any existing artifact.
    pub async fn install(&self, raw: &str) -> Result<InstallResult> {
        let version = VersionTag::normalize(raw);
        install_version(&self.layout, &self.fetcher, &version, &self.install_options).await
    }

    /// Make an installed version active.
    pub fn use_version(&self, raw: &str) -> Result<UseOutcome> {
        let version = VersionTag::normalize(raw);
        self.switch_to(&version)
    }

    /// Fetch the catalog, let `selector` pick a version, then install it if
    /// needed and switch to it.
    ///
    /// The catalog is fetched before anything else, so a remote failure
    /// leaves the filesystem untouched.
    pub async fn interactive_select(&self, selector: &dyn VersionSelector) -> Result<SelectOutcome> {
        let spinner = Spinner::new("Fetching kubectl releases...", self.install_options.printer);
        let remote = match fetch_available_versions(&self.fetcher, &self.releases_url).await {
            Ok(remote) => {
                spinner.finish_clear();
                remote
            }
            Err(e) => {
                spinner.finish_error("Failed to fetch kubectl releases");
                return Err(e);
            }
        };

        let installed = installed_versions(&self.layout)?;
        let active = active_version(&self.layout);
        let candidates = merge_candidates(remote, &installed, &active);
        debug!("Offering {} candidates", candidates.len());

        let version = match selector.select(&candidates)? {
            Selection::Cancelled => {
                info!("Selection cancelled");
                return Ok(SelectOutcome::Cancelled);
            }
            Selection::Chosen(version) => version,
        };

        let install = if installed.contains(&version) {
            debug!("{} already installed", version);
            None
        } else {
            Some(install_version(&self.layout, &self.fetcher, &version, &self.install_options).await?)
        };

        let outcome = self.switch_to(&version)?;
        Ok(SelectOutcome::Switched {
            installed: install,
            outcome,
        })
    }

    /// Installed versions, newest first.
    pub fn installed(&self) -> Result<Vec<VersionTag>> {
        let mut versions: Vec<VersionTag> = installed_versions(&self.layout)?.into_iter().collect();
        sort_newest_first(&mut versions);
        Ok(versions)
    }

    /// The version the stable binary currently points at.
    pub fn current(&self) -> ActiveState {
        active_version(&self.layout)
    }

    /// PATH advice for the managed bin directory, if it is not on `PATH`.
    pub fn path_advice(&self) -> Option<PathAdvice> {
        advise(&self.layout, self.search_path.as_deref())
    }

    fn switch_to(&self, version: &VersionTag) -> Result<UseOutcome> {
        let activation = activate(&self.layout, version)?;
        Ok(UseOutcome {
            activation,
            path_advice: self.path_advice(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::platform::{Arch, Os, Platform};
    use crate::testing::{ScriptedSelector, StaticFetcher, releases_json};
    use kv_core::ErrorCode;
    use kv_ui::Printer;
    use std::fs;
    use tempfile::TempDir;

    const RELEASES: &str = "https://releases.example.test/kubernetes";
    const DOWNLOADS: &str = "https://dl.example.test/release";

    fn download(version: &str) -> String {
        format!("{DOWNLOADS}/{version}/bin/linux/amd64/kubectl")
    }

    fn manager(root: &std::path::Path, fetcher: StaticFetcher) -> VersionManager<StaticFetcher> {
        VersionManager::new(Layout::new(root), fetcher)
            .with_releases_url(RELEASES)
            .with_install_options(InstallOptions {
                download_url: DOWNLOADS.to_string(),
                platform: Some(Platform::new(Os::Linux, Arch::Amd64)),
                printer: Printer::Silent,
            })
            .with_search_path(Some(OsString::from("/usr/bin:/bin")))
    }

    #[tokio::test]
    async fn test_install_then_use_scenario() {
        let temp = TempDir::new().unwrap();
        let fetcher = StaticFetcher::new().route(&download("v1.29.0"), 200, "kubectl 1.29");
        let manager = manager(temp.path(), fetcher);
        let layout = manager.layout().clone();

        let installed = manager.install("1.29.0").await.unwrap();
        assert_eq!(installed.path, layout.artifact_path("v1.29.0"));
        assert_eq!(manager.installed().unwrap(), vec![VersionTag::normalize("v1.29.0")]);

        let first = manager.use_version("1.29.0").unwrap();
        assert_eq!(fs::read_link(layout.stable_binary()).unwrap(), installed.path);
        assert!(first.path_advice.is_some());

        let second = manager.use_version("v1.29.0").unwrap();
        assert!(second.activation.was_noop());
        assert_eq!(fs::read_link(layout.stable_binary()).unwrap(), installed.path);
        assert_eq!(
            manager.current(),
            ActiveState::ActiveVersion(VersionTag::normalize("v1.29.0"))
        );
    }

    #[tokio::test]
    async fn test_use_not_installed() {
        let temp = TempDir::new().unwrap();
        let manager = manager(temp.path(), StaticFetcher::new());

        let err = manager.use_version("1.30.0").unwrap_err();
        assert_eq!(err.code(), ErrorCode::VersionNotInstalled);
        assert!(fs::symlink_metadata(manager.layout().stable_binary()).is_err());
    }

    #[tokio::test]
    async fn test_path_advice_when_on_path() {
        let temp = TempDir::new().unwrap();
        let bin = Layout::new(temp.path()).bin_dir();
        let mut search_path = OsString::from("/usr/bin:");
        search_path.push(bin.as_os_str());
        let manager = manager(temp.path(), StaticFetcher::new()).with_search_path(Some(search_path));

        assert_eq!(manager.path_advice(), None);
    }

    #[tokio::test]
    async fn test_select_cancel_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let fetcher = StaticFetcher::new().route(RELEASES, 200, releases_json(&["v1.29.0"]));
        let manager = manager(temp.path(), fetcher);
        let selector = ScriptedSelector::cancel();

        let outcome = manager.interactive_select(&selector).await.unwrap();

        assert_eq!(outcome, SelectOutcome::Cancelled);
        assert_eq!(selector.shown().len(), 1);
        assert!(!manager.layout().versions_dir().exists());
        assert!(!manager.layout().bin_dir().exists());
    }

    #[tokio::test]
    async fn test_select_not_installed_installs_then_switches() {
        let temp = TempDir::new().unwrap();
        let fetcher = StaticFetcher::new()
            .route(RELEASES, 200, releases_json(&["v1.28.0", "v1.30.0", "v1.29.0"]))
            .route(&download("v1.30.0"), 200, "kubectl 1.30");
        let manager = manager(temp.path(), fetcher);
        let selector = ScriptedSelector::choose("1.30.0");

        let outcome = manager.interactive_select(&selector).await.unwrap();

        let SelectOutcome::Switched { installed, outcome } = outcome else {
            panic!("expected a switch");
        };
        assert_eq!(installed.unwrap().version, VersionTag::normalize("v1.30.0"));
        assert_eq!(outcome.activation.version, VersionTag::normalize("v1.30.0"));

        let shown: Vec<String> = selector.shown().iter().map(|c| c.label()).collect();
        assert_eq!(shown, ["v1.30.0", "v1.29.0", "v1.28.0"]);
        assert_eq!(
            fs::read_link(manager.layout().stable_binary()).unwrap(),
            manager.layout().artifact_path("v1.30.0")
        );
    }

    #[tokio::test]
    async fn test_select_installed_skips_download() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::new(temp.path());
        fs::create_dir_all(layout.versions_dir()).unwrap();
        fs::write(layout.artifact_path("v1.29.0"), "kubectl 1.29").unwrap();

        let fetcher = StaticFetcher::new().route(RELEASES, 200, releases_json(&["v1.30.0", "v1.29.0"]));
        let manager = manager(temp.path(), fetcher);
        let selector = ScriptedSelector::choose("v1.29.0");

        let outcome = manager.interactive_select(&selector).await.unwrap();

        assert!(matches!(outcome, SelectOutcome::Switched { installed: None, .. }));
        assert_eq!(manager.fetcher.requests(), vec![RELEASES.to_string()]);
        let shown: Vec<String> = selector.shown().iter().map(|c| c.label()).collect();
        assert_eq!(shown, ["v1.30.0", "v1.29.0 (installed)"]);
    }

    #[tokio::test]
    async fn test_select_server_error_mutates_nothing() {
        let temp = TempDir::new().unwrap();
        let fetcher = StaticFetcher::new().route(RELEASES, 500, "internal error");
        let manager = manager(temp.path(), fetcher);
        let selector = ScriptedSelector::choose("v1.29.0");

        let err = manager.interactive_select(&selector).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::RemoteNonSuccessStatus);
        assert!(selector.shown().is_empty());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_select_failed_download_keeps_previous_version() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::new(temp.path());
        fs::create_dir_all(layout.versions_dir()).unwrap();
        fs::write(layout.artifact_path("v1.28.0"), "kubectl 1.28").unwrap();

        let fetcher = StaticFetcher::new()
            .route(RELEASES, 200, releases_json(&["v1.29.0", "v1.28.0"]))
            .route(&download("v1.29.0"), 404, "");
        let manager = manager(temp.path(), fetcher);
        manager.use_version("v1.28.0").unwrap();

        let err = manager
            .interactive_select(&ScriptedSelector::choose("v1.29.0"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::RemoteNonSuccessStatus);
        assert_eq!(
            manager.current(),
            ActiveState::ActiveVersion(VersionTag::normalize("v1.28.0"))
        );
    }
}
