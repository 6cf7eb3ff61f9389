//! Manifest query layer
//!
//! Filters the static package catalog and assembles protocol manifests from
//! resolved releases.
//!
//! # Modules
//!
//! - [`error`]: Error types for manifest queries
//! - [`models`]: Request and response shapes of the REST source protocol
//! - [`query`]: Predicate algebra over package entries
//! - [`repository`]: Catalog lookups and manifest assembly
//! - [`service`]: Search, manifest and information operations

pub mod error;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;
