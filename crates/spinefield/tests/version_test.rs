#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(spinefield::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!spinefield::VERSION.is_empty());
}
