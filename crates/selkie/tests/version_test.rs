#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(selkie::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!selkie::VERSION.is_empty());
}
