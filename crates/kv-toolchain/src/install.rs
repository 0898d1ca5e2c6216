//! kubectl binary download and installation.
//!
//! Downloads a kubectl binary into the version store. The body is staged
//! in a hidden partial file and renamed into place only once it is fully
//! written, so an interrupted download never shows up as installed.

use crate::fetch::{FetchResponse, Fetcher};
use crate::platform::{Platform, kubectl_download_url};
use crate::version::VersionTag;
use futures_util::StreamExt;
use kv_config::{DEFAULT_DOWNLOAD_URL, Layout};
use kv_core::{Error, Result};
use kv_ui::{Printer, Progress, Style};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const ACTION: &str = "download kubectl";

/// Options for downloading and installing kubectl.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Base URL binaries are fetched from.
    pub download_url: String,
    /// Target platform (auto-detected if None).
    pub platform: Option<Platform>,
    /// Controls where the progress bar is drawn.
    pub printer: Printer,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            download_url: DEFAULT_DOWNLOAD_URL.to_string(),
            platform: None,
            printer: Printer::Normal,
        }
    }
}

/// Result of a kubectl installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallResult {
    /// The installed version.
    pub version: VersionTag,
    /// Path of the artifact in the version store.
    pub path: PathBuf,
    /// Number of bytes written.
    pub bytes: u64,
}

/// Download `version` into the version store.
///
/// Always downloads, overwriting an existing artifact; callers decide
/// whether an install is needed.
pub async fn install_version(
    layout: &Layout,
    fetcher: &dyn Fetcher,
    version: &VersionTag,
    options: &InstallOptions,
) -> Result<InstallResult> {
    let versions_dir = layout.versions_dir();
    fs::create_dir_all(&versions_dir)
        .map_err(|e| Error::directory_create("versions", &versions_dir, e))?;

    let platform = match options.platform {
        Some(platform) => platform,
        None => Platform::current().ok_or_else(|| {
            Error::config(format!(
                "unsupported platform: {}-{}",
                std::env::consts::OS,
                std::env::consts::ARCH
            ))
        })?,
    };

    info!("Installing kubectl {} for {}", version, platform);

    let url = kubectl_download_url(&options.download_url, version, platform);
    debug!("Downloading from {}", url);
    let response = fetcher
        .get(&url)
        .await
        .map_err(|e| Error::network(ACTION, &url, e))?;

    if !response.is_success() {
        return Err(Error::remote_status(ACTION, &url, response.status));
    }

    let dest = layout.artifact_path(version.as_str());
    let partial = layout.partial_path(version.as_str());

    let bytes = match download_to(response, &partial, &url, version, options.printer).await {
        Ok(bytes) => bytes,
        Err(e) => {
            let _ = fs::remove_file(&partial);
            return Err(e);
        }
    };

    fs::rename(&partial, &dest).map_err(|e| {
        let _ = fs::remove_file(&partial);
        Error::ArtifactWrite {
            path: dest.clone(),
            source: e,
        }
    })?;

    info!("kubectl {} installed at {}", version, dest.display());
    Ok(InstallResult {
        version: version.clone(),
        path: dest,
        bytes,
    })
}

/// Stream the body into `path` with progress display and mark it executable.
async fn download_to(
    response: FetchResponse,
    path: &Path,
    url: &str,
    version: &VersionTag,
    printer: Printer,
) -> Result<u64> {
    let write_err = |e: std::io::Error| Error::ArtifactWrite {
        path: path.to_path_buf(),
        source: e,
    };

    // Show progress bar if we know the size
    let progress = response
        .content_length
        .filter(|len| *len > 0)
        .map(|len| Progress::new(len, format!("Downloading kubectl {}", version), printer));

    let mut file = File::create(path).map_err(write_err)?;
    let mut body = response.body;
    let mut downloaded: u64 = 0;

    while let Some(chunk) = body.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                if let Some(pb) = progress {
                    pb.abandon();
                }
                return Err(Error::network(ACTION, url, e));
            }
        };
        file.write_all(&chunk).map_err(write_err)?;
        downloaded += chunk.len() as u64;
        if let Some(ref pb) = progress {
            pb.inc(chunk.len() as u64);
        }
    }

    file.flush().map_err(write_err)?;
    drop(file);
    make_executable(path).map_err(write_err)?;

    if let Some(pb) = progress {
        pb.finish(format!(
            "Downloaded kubectl {} ({})",
            version,
            Style::megabytes(downloaded)
        ));
    }

    Ok(downloaded)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
