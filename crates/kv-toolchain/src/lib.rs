//! kubectl version management for kubeversion.
//!
//! This crate handles:
//! - Normalizing version tags
//! - Scanning installed versions in the version store
//! - Listing upstream releases
//! - Downloading kubectl binaries
//! - Activating a version through the stable symlink
//! - Checking whether the managed bin directory is on `PATH`

pub mod activate;
pub mod advisor;
pub mod fetch;
pub mod install;
pub mod inventory;
pub mod manager;
pub mod platform;
pub mod remote;
pub mod select;
pub mod version;

#[cfg(test)]
pub(crate) mod testing;

pub use activate::{ActiveState, Activation, activate, active_version};
pub use advisor::{PathAdvice, advise, is_on_search_path};
pub use fetch::{ByteStream, FetchResponse, Fetcher, HttpFetcher};
pub use install::{InstallOptions, InstallResult, install_version};
pub use inventory::{installed_versions, is_installed};
pub use manager::{SelectOutcome, UseOutcome, VersionManager};
pub use platform::{Arch, Os, Platform, kubectl_download_url};
pub use remote::fetch_available_versions;
pub use select::{Candidate, Selection, VersionSelector, merge_candidates};
pub use version::{TAG_MARKER, VersionTag, normalize, sort_newest_first};
