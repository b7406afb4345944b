//! Error types for Iconsmith
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Iconsmith operations
pub type IconsmithResult<T> = Result<T, IconsmithError>;

/// Main error type for Iconsmith operations
///
/// Every variant is fatal: the build never retries, skips a file, or writes
/// a partial manifest.
#[derive(Error, Debug)]
pub enum IconsmithError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Manifest serialization or parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Manifest file missing where one was expected
    #[error("manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_directory_not_found() {
        let err = IconsmithError::DirectoryNotFound {
            path: PathBuf::from("icons"),
        };
        assert_eq!(err.to_string(), "directory not found: icons");
    }

    #[test]
    fn test_error_display_manifest_not_found() {
        let err = IconsmithError::ManifestNotFound {
            path: PathBuf::from("dist/manifest.json"),
        };
        assert_eq!(err.to_string(), "manifest not found: dist/manifest.json");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IconsmithError::from(io);
        assert!(err.to_string().starts_with("IO error:"));
    }
}
