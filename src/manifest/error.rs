use thiserror::Error;

use crate::catalog::error::ResolveError;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("unknown package identifier: {0}")]
    PackageNotFound(String),

    #[error("{0} not found")]
    VersionNotFound(String),

    #[error("fetch versions: {0}")]
    Resolve(#[from] ResolveError),
}

impl ManifestError {
    /// Whether the requested package or version does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ManifestError::PackageNotFound(_) | ManifestError::VersionNotFound(_)
        )
    }
}
