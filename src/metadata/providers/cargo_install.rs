//! Cargo's record of `cargo install`ed packages
//!
//! Cargo tracks installed packages in `$CARGO_HOME/.crates2.json`, keyed by
//! package id (`"<name> <version> (<source>)"`).

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use semver::Version;
use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::debug;

use crate::metadata::error::MetadataError;
use crate::metadata::normalize_name;
use crate::metadata::provider::MetadataProvider;

/// File name of Cargo's install tracking manifest
pub const INSTALL_MANIFEST: &str = ".crates2.json";

/// Reads installed versions from Cargo's install manifest
pub struct CargoInstallProvider {
    cargo_home: PathBuf,
}

impl CargoInstallProvider {
    pub fn new(cargo_home: PathBuf) -> Self {
        Self { cargo_home }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.cargo_home.join(INSTALL_MANIFEST)
    }
}

/// `.crates2.json` structure; only the package ids are needed
#[derive(Debug, Deserialize)]
struct InstallManifest {
    #[serde(default)]
    installs: BTreeMap<String, IgnoredAny>,
}

/// Name and version parsed from a package id
#[derive(Debug)]
struct PackageId<'a> {
    name: &'a str,
    version: Version,
}

/// Parse `"<name> <version> (<source>)"`.
///
/// Returns None when the id has no version or the version is not valid semver.
fn parse_package_id(id: &str) -> Option<PackageId<'_>> {
    let mut parts = id.splitn(3, ' ');
    let name = parts.next().filter(|n| !n.is_empty())?;
    let version = Version::parse(parts.next()?).ok()?;
    Some(PackageId { name, version })
}

fn read_manifest(path: &Path) -> Result<Option<InstallManifest>, MetadataError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(MetadataError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| MetadataError::InvalidManifest {
            path: path.to_path_buf(),
            source,
        })
}

impl MetadataProvider for CargoInstallProvider {
    fn source_name(&self) -> &'static str {
        "cargo-install"
    }

    fn lookup(&self, name: &str) -> Result<String, MetadataError> {
        let path = self.manifest_path();
        let Some(manifest) = read_manifest(&path)? else {
            debug!("No install manifest at {}", path.display());
            return Err(MetadataError::NotFound(name.to_string()));
        };

        let wanted = normalize_name(name);
        let latest = manifest
            .installs
            .keys()
            .filter_map(|id| {
                let parsed = parse_package_id(id);
                if parsed.is_none() {
                    debug!("Skipping malformed package id: {}", id);
                }
                parsed
            })
            .filter(|id| normalize_name(id.name) == wanted)
            .map(|id| id.version)
            .max();

        match latest {
            Some(version) => {
                debug!("Found {} {} in {}", name, version, path.display());
                Ok(version.to_string())
            }
            None => Err(MetadataError::NotFound(name.to_string())),
        }
    }
}
