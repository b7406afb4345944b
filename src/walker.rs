//! Directory walker
//!
//! Produces a flat list of every regular file under a root directory. The
//! traversal keeps an explicit worklist of pending directories instead of
//! recursing, so pathological nesting cannot overflow the call stack.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconsmithError, IconsmithResult};

/// List every file reachable under `root`, in no particular order.
///
/// Directories themselves are not listed, and hidden entries are not
/// skipped. Fails if `root` is missing or is not a directory, or if any
/// directory along the way cannot be read.
pub fn walk_files(root: &Path) -> IconsmithResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IconsmithError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                pending.push(path);
            } else {
                files.push(path);
            }
        }
    }

    Ok(files)
}
