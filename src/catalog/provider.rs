//! Release provider trait and provider dispatch

use std::collections::HashMap;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::catalog::error::ResolveError;
use crate::catalog::providers::{GitHubProvider, GitLabProvider};
use crate::catalog::types::{PackageListEntry, Version};

/// Upstream platforms a package can be hosted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    GitHub,
    GitLab,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::GitHub => "github",
            ProviderKind::GitLab => "gitlab",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(ProviderKind::GitHub),
            "gitlab" => Ok(ProviderKind::GitLab),
            _ => Err(()),
        }
    }
}

/// Trait for resolving a package's upstream releases into versions
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseProvider: Send + Sync {
    /// Returns the platform this implementation handles
    fn provider_kind(&self) -> ProviderKind;

    /// Fetches all releases of the package and resolves their installers
    ///
    /// # Returns
    /// * `Ok(Vec<Version>)` - One version per release with at least one installer, in upstream order
    /// * `Err(ResolveError)` - If any upstream call, decode, or checksum parse fails
    async fn fetch_versions(
        &self,
        entry: &PackageListEntry,
    ) -> Result<Vec<Version>, ResolveError>;
}

/// Maps a package's declared provider name to its release provider
#[derive(Clone)]
pub struct ProviderDispatch {
    providers: HashMap<ProviderKind, Arc<dyn ReleaseProvider>>,
}

impl ProviderDispatch {
    pub fn new(providers: HashMap<ProviderKind, Arc<dyn ReleaseProvider>>) -> Self {
        Self { providers }
    }

    /// Returns the provider for the entry, failing for unknown provider names
    pub fn dispatch(
        &self,
        entry: &PackageListEntry,
    ) -> Result<&Arc<dyn ReleaseProvider>, ResolveError> {
        let unknown = || ResolveError::UnknownProvider(entry.provider.clone());
        let kind = entry.provider.parse::<ProviderKind>().map_err(|_| unknown())?;
        let provider = self.providers.get(&kind).ok_or_else(unknown)?;

        debug!("Dispatching {} to {} provider", entry.id, kind.as_str());
        Ok(provider)
    }

    /// Dispatches and resolves the entry's versions
    pub async fn fetch_versions(
        &self,
        entry: &PackageListEntry,
    ) -> Result<Vec<Version>, ResolveError> {
        self.dispatch(entry)?.fetch_versions(entry).await
    }
}

impl Default for ProviderDispatch {
    fn default() -> Self {
        Self::new(create_default_providers())
    }
}

/// Create the default set of release providers for all supported platforms
pub fn create_default_providers() -> HashMap<ProviderKind, Arc<dyn ReleaseProvider>> {
    let mut providers: HashMap<ProviderKind, Arc<dyn ReleaseProvider>> = HashMap::new();
    providers.insert(ProviderKind::GitHub, Arc::new(GitHubProvider::default()));
    providers.insert(ProviderKind::GitLab, Arc::new(GitLabProvider::default()));
    providers
}
