//! Iconsmith CLI - icon distribution builder
//!
//! Usage: iconsmith <COMMAND>
//!
//! Commands:
//!   build   Copy icon sources to the dist tree and write the manifest
//!   verify  Check dist files against a previously written manifest

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use iconsmith::config::{BuildConfig, DEFAULT_OUT_DIR, DEFAULT_SOURCE_DIR};
use iconsmith::verify::IssueKind;

/// Iconsmith - icon distribution builder
#[derive(Parser, Debug)]
#[command(name = "iconsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Copy icon sources to the dist tree and write the manifest
    Build {
        /// Directory containing the .svg sources
        #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
        source: PathBuf,

        /// Output directory for icon copies and the manifest
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out: PathBuf,
    },

    /// Check dist files against a previously written manifest
    Verify {
        /// Output directory holding the manifest and icon copies
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { source, out } => cmd_build(source, out, cli.json),
        Commands::Verify { out } => cmd_verify(&out, cli.json),
    }
}

fn cmd_build(source: PathBuf, out: PathBuf, json: bool) -> Result<()> {
    let config = BuildConfig::new(source, out);
    let version = iconsmith::config::version_from_env();

    let outcome = iconsmith::build::run_build(&config, &version)?;
    let count = outcome.manifest.icons.len();

    if json {
        let output = serde_json::json!({
            "event": "build",
            "version": outcome.manifest.version,
            "icons": count,
            "manifest": outcome.manifest_path.display().to_string(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Built {} icons", count);
        println!("Wrote {}", outcome.manifest_path.display());
    }

    Ok(())
}

fn cmd_verify(out: &PathBuf, json: bool) -> Result<()> {
    let report = iconsmith::verify::verify_dist(out)?;

    if json {
        let output = serde_json::json!({
            "event": "verify",
            "ok": report.ok,
            "issues": report.issues.len(),
            "success": report.is_success(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for issue in &report.issues {
            let reason = match issue.kind {
                IssueKind::Missing => "missing",
                IssueKind::HashMismatch => "hash mismatch",
                IssueKind::SizeMismatch => "size mismatch",
            };
            println!("✗ {} ({}) - {}", issue.name, issue.path, reason);
        }
        println!("Verified {} of {} icons", report.ok, report.total());
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} icons failed verification",
            report.issues.len(),
            report.total()
        );
    }

    Ok(())
}
