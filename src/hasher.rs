//! Content hashing
//!
//! SHA-256 digests, lowercase hex, used to fingerprint icon bytes for
//! integrity and change detection by manifest consumers.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::IconsmithResult;

/// Compute the lowercase hex SHA-256 digest of a byte buffer.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Compute the lowercase hex SHA-256 digest of a file's content.
pub fn hash_file(path: &Path) -> IconsmithResult<String> {
    Ok(hash_bytes(&fs::read(path)?))
}
