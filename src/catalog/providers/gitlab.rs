//! GitLab Releases API provider implementation

use serde::Deserialize;
use tracing::debug;

use crate::catalog::error::ResolveError;
use crate::catalog::http::fetch_json;
use crate::catalog::provider::{ProviderKind, ReleaseProvider};
use crate::catalog::release::{installer_mode, resolve_releases};
use crate::catalog::types::{PackageListEntry, ReleaseAsset, UpstreamRelease, Version};

const STAGE: &str = "gitlab releases API";

/// Response from GitLab Releases API
#[derive(Debug, Deserialize)]
struct Release {
    name: Option<String>,
    #[serde(default)]
    tag_name: String,
    #[serde(default)]
    assets: Assets,
}

#[derive(Debug, Default, Deserialize)]
struct Assets {
    #[serde(default)]
    links: Vec<Link>,
}

#[derive(Debug, Deserialize)]
struct Link {
    name: String,
    url: String,
}

impl From<Release> for UpstreamRelease {
    fn from(release: Release) -> Self {
        let name = match release.name {
            Some(name) if !name.is_empty() => name,
            _ => release.tag_name,
        };

        Self {
            name,
            assets: release
                .assets
                .links
                .into_iter()
                .map(ReleaseAsset::from)
                .collect(),
        }
    }
}

impl From<Link> for ReleaseAsset {
    fn from(link: Link) -> Self {
        let checksum_manifest = link.name.to_lowercase().contains("checksum");

        Self {
            name: link.name,
            download_url: link.url,
            checksum_manifest,
        }
    }
}

/// Release provider for projects hosted on a GitLab instance.
///
/// The instance URL comes from each package's `endpoint`.
pub struct GitLabProvider {
    client: reqwest::Client,
}

impl GitLabProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("winget-src")
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for GitLabProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ReleaseProvider for GitLabProvider {
    fn provider_kind(&self) -> ProviderKind {
        ProviderKind::GitLab
    }

    async fn fetch_versions(
        &self,
        entry: &PackageListEntry,
    ) -> Result<Vec<Version>, ResolveError> {
        let mode = installer_mode(entry)?;
        let url = format!(
            "{}/api/v4/projects/{}/releases",
            entry.endpoint.trim_end_matches('/'),
            entry.project_id
        );
        debug!("Fetching GitLab releases for {}: {}", entry.id, url);

        let mut request = self.client.get(&url);
        if let Some(token) = entry.token() {
            request = request.header("PRIVATE-TOKEN", token);
        }

        let releases: Vec<Release> = fetch_json(request, STAGE).await?;
        let releases = releases.into_iter().map(UpstreamRelease::from).collect();

        resolve_releases(&self.client, entry, mode, releases).await
    }
}
