//! Installed-distribution metadata lookup
//!
//! Resolves the version string of a named distribution from one or more
//! metadata sources, falling back to a fixed sentinel when no source knows it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │ VersionResolver │────▶│ MetadataProvider │
//! │  (fallback)     │     │     (lookup)     │
//! └─────────────────┘     └──────────────────┘
//!                                  │
//!                                  ▼
//!                  ┌───────────────────────────────┐
//!                  │ Builtin │ CargoInstall │ Chain │
//!                  └───────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`provider`]: `MetadataProvider` trait for querying a metadata source
//! - [`providers`]: Concrete sources (compiled-in, `cargo install` records, chains)
//! - [`resolver`]: `VersionResolver`, which never fails and returns `"0.0.0"` on a miss
//! - [`error`]: Error types for metadata lookups

pub mod error;
pub mod provider;
pub mod providers;
pub mod resolver;

use std::path::PathBuf;

use crate::metadata::providers::{BuiltinProvider, CargoInstallProvider, ChainProvider};

/// Normalize a distribution name for comparison.
///
/// Names are matched case-insensitively with `_` and `-` treated as equal.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}

/// Build the default provider chain: the running binary's own metadata first,
/// then Cargo's installed-package records under `cargo_home`.
pub fn default_provider(cargo_home: PathBuf) -> ChainProvider {
    ChainProvider::new()
        .with(BuiltinProvider::default())
        .with(CargoInstallProvider::new(cargo_home))
}
