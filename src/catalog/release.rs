//! Turns provider-neutral releases into installer-bearing versions

use tracing::debug;

use crate::catalog::arch::classify_installer_asset;
use crate::catalog::checksum::ChecksumIndex;
use crate::catalog::error::ResolveError;
use crate::catalog::http::fetch_text;
use crate::catalog::types::{
    Installer, InstallerMode, PackageListEntry, ReleaseAsset, UpstreamRelease, Version,
};

const CHECKSUM_STAGE: &str = "checksum download";

/// Parses the entry's installer mode
pub fn installer_mode(entry: &PackageListEntry) -> Result<InstallerMode, ResolveError> {
    entry
        .installer_type
        .parse()
        .map_err(|_| ResolveError::UnknownInstallerMode(entry.installer_type.clone()))
}

/// Resolves releases in the given installer mode.
///
/// Releases are handled in upstream order. Releases without a qualifying
/// installer are dropped. The first error aborts the whole resolution.
pub async fn resolve_releases(
    client: &reqwest::Client,
    entry: &PackageListEntry,
    mode: InstallerMode,
    releases: Vec<UpstreamRelease>,
) -> Result<Vec<Version>, ResolveError> {
    debug!(
        "Resolving {} releases of {} as {}",
        releases.len(),
        entry.id,
        mode.as_str()
    );

    match mode {
        InstallerMode::ZipPortable => resolve_zip_portable(client, entry, releases).await,
    }
}

async fn resolve_zip_portable(
    client: &reqwest::Client,
    entry: &PackageListEntry,
    releases: Vec<UpstreamRelease>,
) -> Result<Vec<Version>, ResolveError> {
    let mut versions = Vec::new();

    for release in releases {
        let checksums = download_checksums(client, &release.assets).await?;
        let installers = zip_portable_installers(&entry.name, &release.assets, &checksums);

        if installers.is_empty() {
            debug!("Skipping release {:?} of {}: no installers", release.name, entry.id);
            continue;
        }

        versions.push(Version {
            version: release.name,
            installers,
        });
    }

    Ok(versions)
}

/// Downloads every checksum manifest of a release into one index.
///
/// Manifests are merged in asset order, so a later manifest wins for a filename
/// listed more than once.
pub async fn download_checksums(
    client: &reqwest::Client,
    assets: &[ReleaseAsset],
) -> Result<ChecksumIndex, ResolveError> {
    let mut index = ChecksumIndex::new();

    for asset in assets.iter().filter(|a| a.checksum_manifest) {
        debug!("Downloading checksums from {}", asset.download_url);
        let body = fetch_text(client.get(&asset.download_url), CHECKSUM_STAGE).await?;
        index.merge(&body)?;
    }

    Ok(index)
}

/// Builds installers for all Windows zip assets with a known architecture
pub fn zip_portable_installers(
    package_name: &str,
    assets: &[ReleaseAsset],
    checksums: &ChecksumIndex,
) -> Vec<Installer> {
    assets
        .iter()
        .filter_map(|asset| {
            let Some(architecture) = classify_installer_asset(&asset.name) else {
                debug!("Skipping asset {:?}", asset.name);
                return None;
            };

            let sha256 = checksums.get(&asset.name).unwrap_or_default();
            debug!("Asset {:?} is a {} installer", asset.name, architecture.as_str());
            Some(Installer::zip_portable(
                package_name,
                architecture,
                &asset.download_url,
                sha256,
            ))
        })
        .collect()
}
