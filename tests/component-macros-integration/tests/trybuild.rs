//! trybuild UI tests for component_macros

#[test]
fn ui_discoverable() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/discoverable_ok.rs");
}
