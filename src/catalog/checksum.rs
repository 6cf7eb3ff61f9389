//! Checksum manifest parsing
//!
//! Release pages commonly ship a `checksums.txt` in `sha256sum` format:
//!
//! ```text
//! 9f86d081884c7d65...  tool_1.0.0_windows_x86_64.zip
//! 60303ae22b998861...  tool_1.0.0_windows_arm64.zip
//! ```

use std::collections::HashMap;

use crate::catalog::error::ResolveError;

/// Filename to digest table for a single release
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumIndex {
    entries: HashMap<String, String>,
}

impl ChecksumIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one checksum manifest body into the index.
    ///
    /// Filenames are kept verbatim and digests are lowercased. A filename seen
    /// again replaces the earlier digest. Any non-empty line that does not split
    /// into exactly two fields fails the whole merge.
    pub fn merge(&mut self, body: &str) -> Result<(), ResolveError> {
        for line in body.lines() {
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let [hash, filename] = fields.as_slice() else {
                return Err(ResolveError::ChecksumFormat {
                    line: line.to_string(),
                });
            };

            self.entries
                .insert(filename.to_string(), hash.to_ascii_lowercase());
        }

        Ok(())
    }

    /// Parses a single checksum manifest body
    pub fn parse(body: &str) -> Result<Self, ResolveError> {
        let mut index = Self::new();
        index.merge(body)?;
        Ok(index)
    }

    /// Digest for an exact (case-sensitive) filename
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.entries.get(filename).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
