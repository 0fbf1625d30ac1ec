//! Version resolution with a fixed fallback
//!
//! A lookup miss or a broken metadata source never reaches the caller: the
//! resolver answers with [`FALLBACK_VERSION`] instead.

use tracing::{debug, warn};

use crate::metadata::error::MetadataError;
use crate::metadata::provider::MetadataProvider;

/// Version reported when no metadata source knows the distribution
pub const FALLBACK_VERSION: &str = "0.0.0";

/// Distribution queried when the caller does not name one
pub const DEFAULT_DISTRIBUTION: &str = env!("CARGO_PKG_NAME");

/// Resolves installed versions through an injected metadata provider
pub struct VersionResolver<P> {
    provider: P,
}

impl<P: MetadataProvider> VersionResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the installed version of `dist_name`, or [`FALLBACK_VERSION`].
    pub fn resolve(&self, dist_name: &str) -> String {
        match self.provider.lookup(dist_name) {
            Ok(version) => {
                debug!("Resolved {} to {}", dist_name, version);
                version
            }
            Err(MetadataError::NotFound(_)) => {
                debug!(
                    "{} is not installed, using {}",
                    dist_name, FALLBACK_VERSION
                );
                FALLBACK_VERSION.to_string()
            }
            Err(e) => {
                warn!(
                    "Metadata lookup for {} failed, using {}: {}",
                    dist_name, FALLBACK_VERSION, e
                );
                FALLBACK_VERSION.to_string()
            }
        }
    }

    /// Returns the installed version of [`DEFAULT_DISTRIBUTION`].
    pub fn resolve_default(&self) -> String {
        self.resolve(DEFAULT_DISTRIBUTION)
    }
}
