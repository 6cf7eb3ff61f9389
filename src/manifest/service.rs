//! Source operations exposed to the HTTP layer

use crate::config::{SERVER_SUPPORTED_VERSIONS, SOURCE_IDENTIFIER};
use crate::manifest::error::ManifestError;
use crate::manifest::models::{
    InformationResponse, Manifest, ManifestSearchRequest, PackageManifests,
};
use crate::manifest::query::Predicate;
use crate::manifest::repository::ManifestRepository;

pub struct ManifestService {
    repository: ManifestRepository,
}

impl ManifestService {
    pub fn new(repository: ManifestRepository) -> Self {
        Self { repository }
    }

    pub fn information(&self) -> InformationResponse {
        InformationResponse {
            source_identifier: SOURCE_IDENTIFIER.to_string(),
            server_supported_versions: SERVER_SUPPORTED_VERSIONS
                .iter()
                .map(|v| v.to_string())
                .collect(),
        }
    }

    pub async fn manifest_search(
        &self,
        request: &ManifestSearchRequest,
    ) -> Result<Vec<Manifest>, ManifestError> {
        self.repository
            .query_manifest(&Predicate::from(request))
            .await
    }

    /// Full manifest of a package, narrowed to one version when `version` is given.
    ///
    /// An empty version string is treated as no version.
    pub async fn package_manifests(
        &self,
        identifier: &str,
        version: Option<&str>,
    ) -> Result<PackageManifests, ManifestError> {
        let mut manifests = self.repository.query_package_manifests(identifier).await?;

        if let Some(version) = version.filter(|v| !v.is_empty()) {
            let found = manifests
                .versions
                .into_iter()
                .find(|v| v.package_version == version)
                .ok_or_else(|| ManifestError::VersionNotFound(version.to_string()))?;
            manifests.versions = vec![found];
        }

        Ok(manifests)
    }
}
