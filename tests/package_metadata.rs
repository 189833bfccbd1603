use std::path::Path;
use test_log::test;

#[test]
fn package_license_files_exist() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));

    for file in ["LICENSE-APACHE", "LICENSE-MIT", "README.md"] {
        assert!(root.join(file).is_file(), "{file} is missing");
    }

    assert_eq!("MIT OR Apache-2.0", env!("CARGO_PKG_LICENSE"));
}
