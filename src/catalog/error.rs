use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving a package's releases into versions
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{stage}: {source}")]
    Transport {
        stage: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{stage} status {status}: {body}")]
    Status {
        stage: &'static str,
        status: u16,
        body: String,
    },

    #[error("{stage} response decode: {source}")]
    Decode {
        stage: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("checksum format error: expected `<hash> <filename>`, got {line:?}")]
    ChecksumFormat { line: String },

    #[error("unknown package provider: {0}")]
    UnknownProvider(String),

    #[error("unknown installer type: {0}")]
    UnknownInstallerMode(String),
}

/// Errors raised while loading the package list
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read package list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse package list {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}
