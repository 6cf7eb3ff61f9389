//! Provider test utilities

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use winget_src::catalog::error::ResolveError;
use winget_src::catalog::provider::{ProviderDispatch, ProviderKind, ReleaseProvider};
use winget_src::catalog::types::{Architecture, Installer, PackageListEntry, Version};
use winget_src::manifest::repository::ManifestRepository;
use winget_src::manifest::service::ManifestService;

/// Static release provider for testing
pub struct StaticProvider {
    provider_kind: ProviderKind,
    versions: HashMap<String, Vec<String>>,
    delay: Option<Duration>,
    panic_message: Option<&'static str>,
}

impl StaticProvider {
    pub fn new(provider_kind: ProviderKind) -> Self {
        Self {
            provider_kind,
            versions: HashMap::new(),
            delay: None,
            panic_message: None,
        }
    }

    /// Registers versions for a package id; each gets one x64 installer
    pub fn with_versions(mut self, package_id: &str, versions: Vec<&str>) -> Self {
        self.versions.insert(
            package_id.to_string(),
            versions.into_iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    /// Sleeps before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Panics instead of answering
    pub fn panicking(mut self, message: &'static str) -> Self {
        self.panic_message = Some(message);
        self
    }
}

#[async_trait]
impl ReleaseProvider for StaticProvider {
    fn provider_kind(&self) -> ProviderKind {
        self.provider_kind
    }

    async fn fetch_versions(
        &self,
        entry: &PackageListEntry,
    ) -> Result<Vec<Version>, ResolveError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = self.panic_message {
            panic!("{}", message);
        }

        match self.versions.get(&entry.id) {
            Some(versions) => Ok(versions
                .iter()
                .map(|version| Version {
                    version: version.clone(),
                    installers: vec![Installer::zip_portable(
                        &entry.name,
                        Architecture::X64,
                        &format!("https://dl.example.com/{}/{}.zip", entry.name, version),
                        "abc123",
                    )],
                })
                .collect()),
            None => Err(ResolveError::Status {
                stage: "github releases API",
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}

/// Creates a package entry with the given provider, id and name
pub fn package(provider: &str, id: &str, name: &str) -> PackageListEntry {
    PackageListEntry {
        provider: provider.to_string(),
        id: id.to_string(),
        name: name.to_string(),
        publisher: "acme".to_string(),
        description: format!("{} description", name),
        installer_type: "zip-portable".to_string(),
        ..Default::default()
    }
}

/// Creates a service over the packages with the given providers registered
pub fn create_test_service(
    packages: Vec<PackageListEntry>,
    providers: Vec<StaticProvider>,
) -> Arc<ManifestService> {
    let providers: HashMap<ProviderKind, Arc<dyn ReleaseProvider>> = providers
        .into_iter()
        .map(|p| (p.provider_kind(), Arc::new(p) as Arc<dyn ReleaseProvider>))
        .collect();

    Arc::new(ManifestService::new(ManifestRepository::new(
        packages,
        ProviderDispatch::new(providers),
    )))
}
