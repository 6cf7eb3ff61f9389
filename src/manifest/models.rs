//! Request and response shapes of the REST source protocol

use serde::{Deserialize, Serialize};

use crate::catalog::types::Installer;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Query {
    #[serde(
        default,
        rename = "KeyWord",
        alias = "Keyword",
        deserialize_with = "null_as_default"
    )]
    pub keyword: String,
}

/// Package field a search match applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PackageMatchField {
    PackageIdentifier,
    ProductCode,
    PackageName,
    PackageFamilyName,
    /// Any field this source does not search on
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldQuery {
    pub package_match_field: PackageMatchField,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_match: Query,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ManifestSearchRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub query: Query,
    #[serde(deserialize_with = "null_as_default")]
    pub inclusions: Vec<FieldQuery>,
    #[serde(deserialize_with = "null_as_default")]
    pub filters: Vec<FieldQuery>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManifestVersion {
    pub package_version: String,
}

/// Summary manifest returned by searches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Manifest {
    pub package_identifier: String,
    pub package_name: String,
    pub publisher: String,
    pub versions: Vec<ManifestVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InformationResponse {
    pub source_identifier: String,
    pub server_supported_versions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Locale {
    pub package_locale: String,
    pub publisher: String,
    pub package_name: String,
    pub short_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageManifestsVersion {
    pub package_version: String,
    pub default_locale: Locale,
    pub installers: Vec<Installer>,
}

/// Full-detail manifest of one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageManifests {
    pub package_identifier: String,
    pub versions: Vec<PackageManifestsVersion>,
}

/// Success envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponseEntry {
    pub error_code: u16,
    pub error_message: String,
}
