//! Ordered fallback across several metadata providers

use tracing::{debug, warn};

use crate::metadata::error::MetadataError;
use crate::metadata::provider::MetadataProvider;

/// Queries providers in order; the first hit wins.
#[derive(Default)]
pub struct ChainProvider {
    providers: Vec<Box<dyn MetadataProvider>>,
}

impl ChainProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<P: MetadataProvider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl MetadataProvider for ChainProvider {
    fn source_name(&self) -> &'static str {
        "chain"
    }

    fn lookup(&self, name: &str) -> Result<String, MetadataError> {
        for provider in &self.providers {
            match provider.lookup(name) {
                Ok(version) => return Ok(version),
                Err(MetadataError::NotFound(_)) => {
                    debug!("{} has no record of {}", provider.source_name(), name);
                }
                Err(e) => {
                    warn!("{} lookup for {} failed: {}", provider.source_name(), name, e);
                }
            }
        }

        Err(MetadataError::NotFound(name.to_string()))
    }
}
