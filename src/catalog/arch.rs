//! Architecture classification of release asset filenames

use crate::catalog::types::Architecture;

/// Whether the lowercased asset name is a Windows zip archive
pub fn is_windows_zip(lowercase_name: &str) -> bool {
    lowercase_name.contains("windows") && lowercase_name.ends_with(".zip")
}

/// Classifies a lowercased asset name. First matching rule wins.
pub fn classify(lowercase_name: &str) -> Option<Architecture> {
    if lowercase_name.contains("x86_64") || lowercase_name.contains("x64") {
        Some(Architecture::X64)
    } else if lowercase_name.contains("i386") || lowercase_name.contains("x86") {
        Some(Architecture::X86)
    } else if lowercase_name.contains("arm64") {
        Some(Architecture::Arm64)
    } else {
        None
    }
}

/// Applies the Windows zip gate and then classifies; `None` means the asset is skipped
pub fn classify_installer_asset(name: &str) -> Option<Architecture> {
    let lowercase_name = name.to_lowercase();
    if !is_windows_zip(&lowercase_name) {
        return None;
    }
    classify(&lowercase_name)
}
