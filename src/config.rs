//! Build configuration
//!
//! The build entry point takes an explicit [`BuildConfig`] instead of reading
//! ambient process state, so tests can run isolated builds in parallel. The
//! CLI constructs one from its flags, defaulting to the conventional
//! working-directory-relative layout (`icons/` in, `dist/` out).

use std::path::PathBuf;

/// Default source directory, relative to the invocation directory
pub const DEFAULT_SOURCE_DIR: &str = "icons";

/// Default output directory, relative to the invocation directory
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Subdirectory of the output root that receives icon copies.
///
/// Also the prefix of every `path` field in the manifest.
pub const ICONS_SUBDIR: &str = "icons";

/// Manifest file name inside the output root
pub const MANIFEST_FILE: &str = "manifest.json";

/// Environment variable consulted for a release version override
pub const RELEASE_TAG_VAR: &str = "RELEASE_TAG";

/// Input/output roots for a single build run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory tree containing the `.svg` sources
    pub source_root: PathBuf,
    /// Directory receiving the icon copies and the manifest
    pub out_root: PathBuf,
}

impl BuildConfig {
    pub fn new(source_root: impl Into<PathBuf>, out_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            out_root: out_root.into(),
        }
    }

    /// Root of the copied icon tree (`<out>/icons`)
    pub fn dist_icons_root(&self) -> PathBuf {
        self.out_root.join(ICONS_SUBDIR)
    }

    /// Path of the manifest file (`<out>/manifest.json`)
    pub fn manifest_path(&self) -> PathBuf {
        self.out_root.join(MANIFEST_FILE)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_DIR, DEFAULT_OUT_DIR)
    }
}

/// Resolve the manifest version string.
///
/// Priority: release-tag override, then the package-declared version, then
/// the literal `"0.0.0"`. Empty strings count as unset.
pub fn resolve_version(release_tag: Option<&str>, package_version: Option<&str>) -> String {
    release_tag
        .filter(|v| !v.is_empty())
        .or(package_version.filter(|v| !v.is_empty()))
        .unwrap_or("0.0.0")
        .to_string()
}

/// Resolve the manifest version from the process environment.
pub fn version_from_env() -> String {
    let tag = std::env::var(RELEASE_TAG_VAR).ok();
    resolve_version(tag.as_deref(), option_env!("CARGO_PKG_VERSION"))
}
