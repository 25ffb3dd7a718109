//! Build metadata baked into the binary by the build script.
//!
//! Each value is absent when the corresponding source was unavailable at
//! build time (for example, a build outside a git checkout).

/// The crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The UTC timestamp of the build
pub const BUILD_TIME: Option<&str> = option_env!("ABACUS_BUILD_TIME");

/// The most recent git tag at build time
pub const GIT_TAG: Option<&str> = option_env!("ABACUS_GIT_TAG");

/// The short git revision the binary was built from
pub const GIT_HASH: Option<&str> = option_env!("ABACUS_GIT_HASH");
