//! Common types for the package catalog and resolved releases

use serde::{Deserialize, Serialize};

/// One package of the statically configured catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageListEntry {
    /// Upstream platform name (`github` or `gitlab`)
    pub provider: String,
    /// Package identifier exposed to clients (e.g. `Publisher.Tool`)
    pub id: String,
    /// Repository name on GitHub; also used for the nested executable name
    pub name: String,
    /// Repository owner on GitHub
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub description: String,
    /// GitLab instance base URL (e.g. `https://gitlab.com`)
    #[serde(default)]
    pub endpoint: String,
    /// Numeric GitLab project id
    #[serde(default)]
    pub project_id: u64,
    /// Optional API token for the upstream platform
    #[serde(default)]
    pub token: String,
    /// Installer-handling mode (e.g. `zip-portable`)
    pub installer_type: String,
}

impl PackageListEntry {
    /// Returns the configured token, if any
    pub fn token(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }
}

/// How assets of a release are turned into installers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallerMode {
    /// Zip archive wrapping a portable executable
    ZipPortable,
}

impl InstallerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallerMode::ZipPortable => "zip-portable",
        }
    }
}

impl std::str::FromStr for InstallerMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zip-portable" => Ok(InstallerMode::ZipPortable),
            _ => Err(()),
        }
    }
}

/// Canonical installer architecture tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    X64,
    X86,
    Arm64,
}

impl Architecture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::X64 => "x64",
            Architecture::X86 => "x86",
            Architecture::Arm64 => "arm64",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallerType {
    Zip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallerScope {
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestedInstallerType {
    Portable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NestedInstallerFile {
    pub relative_file_path: String,
}

/// One architecture-specific installable artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Installer {
    pub architecture: Architecture,
    pub installer_type: InstallerType,
    pub installer_url: String,
    /// Empty when the release carries no checksum for this asset
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub installer_sha256: String,
    pub scope: InstallerScope,
    pub nested_installer_type: NestedInstallerType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested_installer_files: Vec<NestedInstallerFile>,
}

impl Installer {
    /// Builds a zip installer wrapping `<package_name>.exe`
    pub fn zip_portable(
        package_name: &str,
        architecture: Architecture,
        url: &str,
        sha256: &str,
    ) -> Self {
        Self {
            architecture,
            installer_type: InstallerType::Zip,
            installer_url: url.to_string(),
            installer_sha256: sha256.to_string(),
            scope: InstallerScope::User,
            nested_installer_type: NestedInstallerType::Portable,
            nested_installer_files: vec![NestedInstallerFile {
                relative_file_path: format!("{}.exe", package_name),
            }],
        }
    }
}

/// A resolved upstream release with at least one installer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub version: String,
    pub installers: Vec<Installer>,
}

/// Provider-neutral view of an upstream release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRelease {
    pub name: String,
    pub assets: Vec<ReleaseAsset>,
}

/// Provider-neutral view of one downloadable release file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub name: String,
    pub download_url: String,
    /// Whether the provider considers this asset a checksum manifest
    pub checksum_manifest: bool,
}
