//! Common test utilities for Iconsmith integration tests.
//!
//! Provides `TestEnv`: an isolated temp directory plus helpers to run the
//! iconsmith binary inside it.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running an iconsmith CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp working directory.
pub struct TestEnv {
    /// Temporary directory the binary runs in
    pub root: TempDir,
    /// Path to the iconsmith binary
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_iconsmith")),
        }
    }

    /// Get a path relative to the environment root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file under the environment root, creating parent directories
    pub fn write_file(&self, relative: &str, contents: &[u8]) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full, contents).expect("Failed to write file");
    }

    /// Read a file under the environment root
    pub fn read_file(&self, relative: &str) -> Vec<u8> {
        std::fs::read(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Read and parse the manifest written by a build
    pub fn read_manifest(&self) -> serde_json::Value {
        let text = String::from_utf8(self.read_file("dist/manifest.json"))
            .expect("manifest is not UTF-8");
        serde_json::from_str(&text).expect("manifest is not valid JSON")
    }

    /// Run iconsmith in this environment from the root directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run iconsmith with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env_remove("RELEASE_TAG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute iconsmith");
        self.output_to_result(output)
    }

    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert that a file exists under the environment root
pub fn assert_exists(env: &TestEnv, relative: &str) {
    assert!(
        env.path(relative).exists(),
        "expected {} to exist",
        relative
    );
}

/// Assert that a path does not exist under the environment root
pub fn assert_not_exists(env: &TestEnv, relative: &str) {
    assert!(
        !env.path(relative).exists(),
        "expected {} to not exist",
        relative
    );
}
