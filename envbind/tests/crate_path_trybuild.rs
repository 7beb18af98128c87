//! trybuild coverage for `#[envbind(crate = "...")]` support.
//!
//! Ensures the derive macros accept the `crate` attribute and that the
//! generated code compiles when the runtime crate is reached through another
//! path.

#[test]
fn crate_path_alias_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/crate_path_alias.rs");
    t.pass("tests/trybuild/crate_path_alias_renamed.rs");
}
