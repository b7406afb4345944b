//! Build pipeline
//!
//! The whole run is one sequential pass: walk the source tree, keep the
//! `.svg` files, hash and copy each one into the dist tree, then assemble
//! and write the manifest. Any I/O failure aborts the run before a manifest
//! is written.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::{BuildConfig, ICONS_SUBDIR};
use crate::error::{IconsmithError, IconsmithResult};
use crate::hasher;
use crate::manifest::{IconRecord, Manifest};
use crate::walker;

/// Icon-file extension, matched case-insensitively
const ICON_EXT: &str = ".svg";

/// Result of a completed build run
#[derive(Debug)]
pub struct BuildOutcome {
    /// The manifest that was written
    pub manifest: Manifest,
    /// Where it was written
    pub manifest_path: PathBuf,
}

/// Run a full build: discover, hash, copy, assemble, write.
///
/// Pre-existing files in the output tree that no longer correspond to a
/// source file are left in place; the manifest itself is fully replaced.
pub fn run_build(config: &BuildConfig, version: &str) -> IconsmithResult<BuildOutcome> {
    let all_files = walker::walk_files(&config.source_root)?;
    let dist_icons_root = config.dist_icons_root();

    let mut icons = Vec::new();
    for source in all_files.iter().filter(|p| is_icon_file(p)) {
        icons.push(copy_icon(source, &config.source_root, &dist_icons_root)?);
    }

    let manifest = Manifest::new(version, icons);
    let manifest_path = config.manifest_path();
    write_atomic(&manifest_path, manifest.to_json()?.as_bytes())?;

    Ok(BuildOutcome {
        manifest,
        manifest_path,
    })
}

/// Whether a path names an icon source (`.svg`, any case).
pub fn is_icon_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_ascii_lowercase().ends_with(ICON_EXT))
        .unwrap_or(false)
}

/// Logical icon name: the filename with its `.svg` suffix stripped.
///
/// A file named exactly `.svg` keeps its name; there is nothing left to
/// strip it down to.
pub fn logical_name(file_name: &str) -> String {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(ICON_EXT) && file_name.len() > ICON_EXT.len() {
        file_name[..file_name.len() - ICON_EXT.len()].to_string()
    } else {
        file_name.to_string()
    }
}

/// Path of `file` relative to `root`, with separators normalized to `/`.
pub fn relative_slash_path(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    rel.to_string_lossy().replace('\\', "/")
}

/// Read one source icon, copy it byte-for-byte under `dist_icons_root`, and
/// return its manifest record. The digest is computed over the same buffer
/// that is written.
fn copy_icon(
    source: &Path,
    source_root: &Path,
    dist_icons_root: &Path,
) -> IconsmithResult<IconRecord> {
    let rel = source.strip_prefix(source_root).unwrap_or(source);
    let rel_slash = relative_slash_path(source_root, source);

    let data = fs::read(source)?;

    let dest = dist_icons_root.join(rel);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dest, &data)?;

    let file_name = rel
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    Ok(IconRecord {
        name: logical_name(file_name),
        path: format!("{ICONS_SUBDIR}/{rel_slash}"),
        sha256: hasher::hash_bytes(&data),
        bytes: data.len() as u64,
    })
}

/// Write `contents` to `path` via a tempfile in the destination directory
/// followed by a rename, creating parent directories first.
fn write_atomic(path: &Path, contents: &[u8]) -> IconsmithResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.persist(path).map_err(|e| IconsmithError::Io(e.error))?;
    Ok(())
}
