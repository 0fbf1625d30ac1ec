//! Public library surface

use crate::config::Config;
use crate::metadata::default_provider;
use crate::metadata::resolver::{DEFAULT_DISTRIBUTION, VersionResolver};

/// Return the installed version of a distribution.
///
/// `None` queries this package itself. Never fails: when no metadata source
/// knows the distribution the result is `"0.0.0"`.
///
/// ```
/// assert_eq!(chatboteval::get_version(Some("surely-not-installed-anywhere")), "0.0.0");
/// ```
pub fn get_version(dist_name: Option<&str>) -> String {
    let config = Config::from_env();
    let resolver = VersionResolver::new(default_provider(config.cargo_home));
    resolver.resolve(dist_name.unwrap_or(DEFAULT_DISTRIBUTION))
}
