//! trybuild compile-time tests for injectable_macros

#[test]
fn trybuild_injectable_macros() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/injectable_ok.rs");
    t.pass("tests/trybuild/generic_ok.rs");
}
