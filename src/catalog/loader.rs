//! Package list loading from YAML

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use crate::catalog::error::CatalogError;
use crate::catalog::types::PackageListEntry;

/// Loads the package list from a YAML file
pub fn load_package_list(path: &Path) -> Result<Vec<PackageListEntry>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let packages = parse_package_list(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

/// Parses a YAML sequence of package entries. An empty document is an empty list.
pub fn parse_package_list(contents: &str) -> Result<Vec<PackageListEntry>, serde_yaml_ng::Error> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let packages: Vec<PackageListEntry> = serde_yaml_ng::from_str(contents)?;
    warn_duplicate_ids(&packages);
    Ok(packages)
}

fn warn_duplicate_ids(packages: &[PackageListEntry]) {
    let mut seen = HashSet::new();
    for entry in packages {
        if !seen.insert(entry.id.as_str()) {
            warn!(
                "Duplicate package id {:?}; only the first entry is served by id lookups",
                entry.id
            );
        }
    }
}
