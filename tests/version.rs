use chatboteval::get_version;
use chatboteval::metadata::providers::ChainProvider;
use chatboteval::metadata::resolver::{DEFAULT_DISTRIBUTION, VersionResolver};

#[test]
fn get_version_reports_own_package_version() {
    let version = get_version(None);

    assert!(!version.is_empty());
    assert_eq!(version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn get_version_is_stable_within_process() {
    let first = get_version(None);

    for _ in 0..5 {
        assert_eq!(get_version(None), first);
    }
}

#[test]
fn get_version_returns_sentinel_for_names_nobody_installed() {
    for name in [
        "chatboteval-definitely-not-installed",
        "",
        "   ",
        "name with spaces",
        "../../etc/passwd",
    ] {
        assert_eq!(get_version(Some(name)), "0.0.0", "name: {name:?}");
    }
}

#[test]
fn own_distribution_without_metadata_resolves_to_sentinel() {
    let resolver = VersionResolver::new(ChainProvider::new());

    assert_eq!(DEFAULT_DISTRIBUTION, "chatboteval");
    assert_eq!(resolver.resolve_default(), "0.0.0");
}
