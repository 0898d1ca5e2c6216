//! Upstream kubectl release listing.

use crate::fetch::Fetcher;
use crate::version::{TAG_MARKER, VersionTag, sort_newest_first};
use kv_core::{Error, Result};
use serde::Deserialize;
use tracing::debug;

/// A single entry of the GitHub releases API.
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Fetch the release catalog and return tagged versions, newest first.
///
/// Transport, status and decode failures surface as distinct errors.
/// Nothing is written to disk.
pub async fn fetch_available_versions(
    fetcher: &dyn Fetcher,
    releases_url: &str,
) -> Result<Vec<VersionTag>> {
    const ACTION: &str = "fetch versions";

    debug!("Fetching release catalog from {}", releases_url);
    let response = fetcher
        .get(releases_url)
        .await
        .map_err(|e| Error::network(ACTION, releases_url, e))?;

    if !response.is_success() {
        return Err(Error::remote_status(ACTION, releases_url, response.status));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::network(ACTION, releases_url, e))?;

    let releases: Vec<Release> =
        serde_json::from_slice(&body).map_err(|e| Error::decode("versions", releases_url, e))?;

    let mut versions: Vec<VersionTag> = releases
        .iter()
        .filter(|release| release.tag_name.starts_with(TAG_MARKER))
        .map(|release| VersionTag::normalize(&release.tag_name))
        .collect();

    sort_newest_first(&mut versions);
    versions.dedup();

    debug!("Found {} tagged releases", versions.len());
    Ok(versions)
}
