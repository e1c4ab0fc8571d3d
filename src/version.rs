//! Generator/runtime version pairing.
//!
//! Generated modules embed the runtime version they were generated for and check it
//! at compile time against [`RUNTIME_VERSION`].

/// Version string of this runtime.
pub const RUNTIME_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-beta");

/// Version string the generator reports for itself.
pub const GENERATOR_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-dev");

/// Runtime version a generator of `generator_version` targets: `-dev` stripped,
/// `-beta` appended.
pub fn expected_runtime_version(generator_version: &str) -> String {
    let base = generator_version.strip_suffix("-dev").unwrap_or(generator_version);
    format!("{}-beta", base)
}

pub const fn is_compatible_gencode_version(expected: &str) -> bool {
    let a = expected.as_bytes();
    let b = RUNTIME_VERSION.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Evaluated in a `const _: ()` item by generated code, so a mismatch is a build error.
///
/// ```
/// use protobind::version::{assert_compatible_gencode_version, RUNTIME_VERSION};
/// const _: () = assert_compatible_gencode_version(RUNTIME_VERSION);
/// ```
///
/// A module generated for another runtime does not build:
///
/// ```compile_fail
/// const _: () = protobind::version::assert_compatible_gencode_version("0.0.0-beta");
/// ```
pub const fn assert_compatible_gencode_version(expected: &str) {
    if !is_compatible_gencode_version(expected) {
        panic!("generated code does not match the protobind runtime version; regenerate it");
    }
}
