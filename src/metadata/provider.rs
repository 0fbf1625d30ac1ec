//! Provider trait for looking up installed distribution versions

#[cfg(test)]
use mockall::automock;

use crate::metadata::error::MetadataError;

/// Trait for querying a source of installed-distribution metadata
#[cfg_attr(test, automock)]
pub trait MetadataProvider: Send + Sync {
    /// Short name of the source, used in log output
    fn source_name(&self) -> &'static str;

    /// Looks up the installed version of a distribution
    ///
    /// # Arguments
    /// * `name` - The distribution name (e.g., "chatboteval")
    ///
    /// # Returns
    /// * `Ok(String)` - The version recorded by this source
    /// * `Err(MetadataError::NotFound)` - If this source has no record of the distribution
    /// * `Err(_)` - If the source itself could not be read
    fn lookup(&self, name: &str) -> Result<String, MetadataError>;
}
