//! Metadata compiled into the running binary

use crate::metadata::error::MetadataError;
use crate::metadata::normalize_name;
use crate::metadata::provider::MetadataProvider;

/// Knows exactly one distribution: by default, this crate as built.
pub struct BuiltinProvider {
    name: &'static str,
    version: &'static str,
}

impl Default for BuiltinProvider {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

impl BuiltinProvider {
    pub fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

impl MetadataProvider for BuiltinProvider {
    fn source_name(&self) -> &'static str {
        "builtin"
    }

    fn lookup(&self, name: &str) -> Result<String, MetadataError> {
        if normalize_name(name) == normalize_name(self.name) && !self.version.is_empty() {
            Ok(self.version.to_string())
        } else {
            Err(MetadataError::NotFound(name.to_string()))
        }
    }
}
