//! GitHub Releases API provider implementation

use serde::Deserialize;
use tracing::debug;

use crate::catalog::error::ResolveError;
use crate::catalog::http::fetch_json;
use crate::catalog::provider::{ProviderKind, ReleaseProvider};
use crate::catalog::release::{installer_mode, resolve_releases};
use crate::catalog::types::{PackageListEntry, ReleaseAsset, UpstreamRelease, Version};

/// Default base URL for GitHub API
const DEFAULT_BASE_URL: &str = "https://api.github.com";

const STAGE: &str = "github releases API";

/// Response from GitHub Releases API
#[derive(Debug, Deserialize)]
struct Release {
    name: Option<String>,
    #[serde(default)]
    tag_name: String,
    #[serde(default)]
    assets: Vec<Asset>,
}

#[derive(Debug, Deserialize)]
struct Asset {
    name: String,
    browser_download_url: String,
    #[serde(default)]
    content_type: String,
}

impl From<Release> for UpstreamRelease {
    fn from(release: Release) -> Self {
        let name = match release.name {
            Some(name) if !name.is_empty() => name,
            _ => release.tag_name,
        };

        Self {
            name,
            assets: release.assets.into_iter().map(ReleaseAsset::from).collect(),
        }
    }
}

impl From<Asset> for ReleaseAsset {
    fn from(asset: Asset) -> Self {
        let checksum_manifest = asset.name.to_lowercase().contains("checksum")
            && asset.content_type.contains("text/plain");

        Self {
            name: asset.name,
            download_url: asset.browser_download_url,
            checksum_manifest,
        }
    }
}

/// Release provider for repositories hosted on GitHub
pub struct GitHubProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubProvider {
    /// Creates a new GitHubProvider with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("winget-src")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for GitHubProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl ReleaseProvider for GitHubProvider {
    fn provider_kind(&self) -> ProviderKind {
        ProviderKind::GitHub
    }

    async fn fetch_versions(
        &self,
        entry: &PackageListEntry,
    ) -> Result<Vec<Version>, ResolveError> {
        let mode = installer_mode(entry)?;
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.base_url, entry.publisher, entry.name
        );
        debug!("Fetching GitHub releases for {}: {}", entry.id, url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = entry.token() {
            request = request.header("Authorization", format!("token {}", token));
        }

        let releases: Vec<Release> = fetch_json(request, STAGE).await?;
        let releases = releases.into_iter().map(UpstreamRelease::from).collect();

        resolve_releases(&self.client, entry, mode, releases).await
    }
}
