//! Iconsmith - icon distribution builder
//!
//! Iconsmith copies SVG icon sources into a distribution tree and emits a
//! JSON manifest describing each icon: logical name, output-relative path,
//! SHA-256 content digest, and byte size. Downstream consumers use the
//! manifest for integrity and change detection.

pub mod build;
pub mod config;
pub mod error;
pub mod hasher;
pub mod manifest;
pub mod verify;
pub mod walker;

// Re-exports for convenience
pub use build::{run_build, BuildOutcome};
pub use config::{resolve_version, BuildConfig};
pub use error::{IconsmithError, IconsmithResult};
pub use manifest::{IconRecord, Manifest};
pub use verify::{verify_dist, IssueKind, VerifyIssue, VerifyReport};
pub use walker::walk_files;
