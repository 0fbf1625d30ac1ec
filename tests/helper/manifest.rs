//! Cargo install manifest fixtures

use tempfile::TempDir;

const CRATES_IO: &str = "registry+https://github.com/rust-lang/crates.io-index";

/// Create a temporary cargo home whose `.crates2.json` records `packages`
/// as `(name, version)` pairs installed from crates.io.
pub fn cargo_home_with(packages: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let installs: serde_json::Map<String, serde_json::Value> = packages
        .iter()
        .map(|(name, version)| {
            (
                format!("{name} {version} ({CRATES_IO})"),
                serde_json::json!({ "bins": [name], "profile": "release" }),
            )
        })
        .collect();
    let manifest = serde_json::json!({ "installs": installs });

    std::fs::write(
        dir.path().join(".crates2.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();
    dir
}

/// Create a temporary cargo home whose `.crates2.json` holds `content` verbatim.
pub fn cargo_home_with_raw(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".crates2.json"), content).unwrap();
    dir
}
