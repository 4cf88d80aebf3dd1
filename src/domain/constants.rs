//! Stable constants shared across the CLI and services.

/// Resources directory a build run writes into unless `--base-dir` says
/// otherwise. Relative to the working directory of the build.
pub const DEFAULT_RESOURCES_DIR: &str = "./src/main/resources";

/// Marker file written inside the resources directory.
pub const MARKER_FILE_NAME: &str = "HelloWorld.txt";

/// Prefix of the single marker line.
pub const MARKER_PREFIX: &str = "Maintainer: ";

/// Project-local build configuration file, looked up in the working
/// directory.
pub const CONFIG_FILE_NAME: &str = "resmark.toml";
