//! Catalog lookups backed by the static package list and live release resolution

use tracing::debug;

use crate::catalog::provider::ProviderDispatch;
use crate::catalog::types::PackageListEntry;
use crate::manifest::error::ManifestError;
use crate::manifest::models::{
    Locale, Manifest, ManifestVersion, PackageManifests, PackageManifestsVersion,
};
use crate::manifest::query::Predicate;

/// Locale attached to every version's default locale
pub const DEFAULT_PACKAGE_LOCALE: &str = "en-us";

pub struct ManifestRepository {
    packages: Vec<PackageListEntry>,
    dispatch: ProviderDispatch,
}

impl ManifestRepository {
    pub fn new(packages: Vec<PackageListEntry>, dispatch: ProviderDispatch) -> Self {
        Self { packages, dispatch }
    }

    /// First entry whose identifier equals `identifier` exactly
    pub fn find(&self, identifier: &str) -> Option<&PackageListEntry> {
        self.packages.iter().find(|entry| entry.id == identifier)
    }

    /// Summary manifests of all matching packages, in catalog order.
    ///
    /// Versions of every match are resolved; any resolution error fails the whole query.
    pub async fn query_manifest(
        &self,
        predicate: &Predicate,
    ) -> Result<Vec<Manifest>, ManifestError> {
        let mut manifests = Vec::new();

        for entry in self.packages.iter().filter(|entry| predicate.matches(entry)) {
            debug!("Resolving versions of {}", entry.id);
            let versions = self.dispatch.fetch_versions(entry).await?;

            manifests.push(Manifest {
                package_identifier: entry.id.clone(),
                package_name: entry.name.clone(),
                publisher: entry.publisher.clone(),
                versions: versions
                    .into_iter()
                    .map(|v| ManifestVersion {
                        package_version: v.version,
                    })
                    .collect(),
            });
        }

        Ok(manifests)
    }

    /// Full manifest of the package with the exact identifier
    pub async fn query_package_manifests(
        &self,
        identifier: &str,
    ) -> Result<PackageManifests, ManifestError> {
        let entry = self
            .find(identifier)
            .ok_or_else(|| ManifestError::PackageNotFound(identifier.to_string()))?;

        let versions = self.dispatch.fetch_versions(entry).await?;
        let default_locale = Locale {
            package_locale: DEFAULT_PACKAGE_LOCALE.to_string(),
            publisher: entry.publisher.clone(),
            package_name: entry.name.clone(),
            short_description: entry.description.clone(),
        };

        Ok(PackageManifests {
            package_identifier: entry.id.clone(),
            versions: versions
                .into_iter()
                .map(|v| PackageManifestsVersion {
                    package_version: v.version,
                    default_locale: default_locale.clone(),
                    installers: v.installers,
                })
                .collect(),
        })
    }
}
