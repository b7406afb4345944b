//! Manifest model
//!
//! The manifest is the sole durable output of a build run: build metadata
//! plus one record per processed icon. Serialization order is stable
//! (`version`, `generatedAt`, `icons`; records as `name`, `path`, `sha256`,
//! `bytes`) so unchanged source trees serialize to identical `icons` arrays
//! across runs.

use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{IconsmithError, IconsmithResult};

/// Manifest entry describing one processed icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Source filename without its `.svg` extension
    pub name: String,
    /// Output-relative path, forward slashes on every host
    pub path: String,
    /// Lowercase hex SHA-256 digest of the icon bytes
    pub sha256: String,
    /// Length of the icon content in bytes
    pub bytes: u64,
}

/// The JSON artifact enumerating all processed icons plus build metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
    pub icons: Vec<IconRecord>,
}

impl Manifest {
    /// Assemble a manifest for the current instant.
    ///
    /// Records are sorted ascending by `name`; records sharing a name (the
    /// same filename under different subdirectories) tie-break on `path` so
    /// output order stays deterministic regardless of traversal order.
    pub fn new(version: impl Into<String>, icons: Vec<IconRecord>) -> Self {
        Self::at(version, generated_at_now(), icons)
    }

    /// Assemble a manifest with an explicit timestamp.
    pub fn at(version: impl Into<String>, generated_at: String, mut icons: Vec<IconRecord>) -> Self {
        icons.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
        Self {
            version: version.into(),
            generated_at,
            icons,
        }
    }

    /// Serialize as indented JSON terminated with a trailing newline.
    pub fn to_json(&self) -> IconsmithResult<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Load a manifest previously written by a build.
    pub fn load(path: &Path) -> IconsmithResult<Self> {
        if !path.is_file() {
            return Err(IconsmithError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Current instant as ISO-8601 UTC with millisecond precision (`...Z`).
fn generated_at_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
