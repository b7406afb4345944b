//! Manifest verification
//!
//! Re-checks a previously built dist tree against its manifest: every record
//! must still point at a file whose SHA-256 digest and byte size match what
//! was recorded. Read-only; never repairs anything.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::MANIFEST_FILE;
use crate::error::IconsmithResult;
use crate::hasher;
use crate::manifest::Manifest;

/// Why a record failed verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// The copied file is gone
    Missing,
    /// Content digest differs from the recorded `sha256`
    HashMismatch,
    /// File length differs from the recorded `bytes`
    SizeMismatch,
}

/// One failed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyIssue {
    pub name: String,
    pub path: String,
    pub kind: IssueKind,
}

/// Outcome of checking a dist tree against its manifest
#[derive(Debug, Default)]
pub struct VerifyReport {
    /// Records whose file, digest, and size all matched
    pub ok: usize,
    /// Records that failed, in manifest order
    pub issues: Vec<VerifyIssue>,
}

impl VerifyReport {
    pub fn is_success(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn total(&self) -> usize {
        self.ok + self.issues.len()
    }
}

/// Verify every record of the manifest under `out_root`.
///
/// A missing copied file is an issue, not an error; anything else that keeps
/// a file from being read (or the manifest from being loaded) aborts.
pub fn verify_dist(out_root: &Path) -> IconsmithResult<VerifyReport> {
    let manifest = Manifest::load(&out_root.join(MANIFEST_FILE))?;

    let mut report = VerifyReport::default();
    for record in &manifest.icons {
        let file = out_root.join(&record.path);
        let data = match fs::read(&file) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                report.issues.push(VerifyIssue {
                    name: record.name.clone(),
                    path: record.path.clone(),
                    kind: IssueKind::Missing,
                });
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let kind = if data.len() as u64 != record.bytes {
            Some(IssueKind::SizeMismatch)
        } else if hasher::hash_bytes(&data) != record.sha256 {
            Some(IssueKind::HashMismatch)
        } else {
            None
        };

        match kind {
            Some(kind) => report.issues.push(VerifyIssue {
                name: record.name.clone(),
                path: record.path.clone(),
                kind,
            }),
            None => report.ok += 1,
        }
    }

    Ok(report)
}
