//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line printed by `glupo --version`.
pub fn version_line() -> String {
    format!("glupo {} ({})", BUILD_DATE, BUILD_COMMIT)
}
