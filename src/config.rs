use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Server constants
// =============================================================================

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Timeout for handling a single API request in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Identifier reported by the information endpoint
pub const SOURCE_IDENTIFIER: &str = "api.winget-src";

/// REST source protocol versions this server speaks
pub const SERVER_SUPPORTED_VERSIONS: &[&str] = &["1.4.0", "1.5.0"];

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Path to the YAML package list
    pub package_list: PathBuf,
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Listens on all interfaces at `port`
    pub fn new(port: u16, package_list: PathBuf) -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            package_list,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Returns the package list used when none is configured.
/// Uses $XDG_CONFIG_HOME/winget-src/packages.yaml if XDG_CONFIG_HOME is set,
/// otherwise the platform config directory (`%APPDATA%` on Windows),
/// or ./winget-src/packages.yaml if neither is available.
pub fn default_package_list_path() -> PathBuf {
    package_list_path_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::config_dir())
}

fn package_list_path_with_env(
    xdg_config_home: Option<String>,
    config_dir: Option<PathBuf>,
) -> PathBuf {
    xdg_config_home
        .map(PathBuf::from)
        .or(config_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("winget-src")
        .join("packages.yaml")
}
