//! Release resolution layer
//!
//! Turns upstream release pages into architecture-tagged, checksum-paired installers.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌────────────────┐     ┌──────────────┐
//! │ ProviderDispatch │────▶│   Providers    │────▶│   Release    │
//! │ (provider name)  │     │ (github,gitlab)│     │ (installers) │
//! └──────────────────┘     └────────────────┘     └──────────────┘
//!                                                    │         │
//!                                                    ▼         ▼
//!                                             ┌──────────┐ ┌──────────┐
//!                                             │ Checksum │ │   Arch   │
//!                                             └──────────┘ └──────────┘
//! ```
//!
//! # Modules
//!
//! - [`arch`]: Windows zip gate and architecture classification of asset names
//! - [`checksum`]: Checksum manifest parsing into a filename to digest index
//! - [`error`]: Error types for resolution and package list loading
//! - [`http`]: Shared upstream GET helpers
//! - [`loader`]: YAML package list loading
//! - [`provider`]: Release provider trait and provider dispatch
//! - [`providers`]: Concrete providers (GitHub, GitLab)
//! - [`release`]: Installer-mode specific resolution of releases
//! - [`types`]: Package entries, installers and versions

pub mod arch;
pub mod checksum;
pub mod error;
pub mod http;
pub mod loader;
pub mod provider;
pub mod providers;
pub mod release;
pub mod types;
