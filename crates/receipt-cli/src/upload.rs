//! External upload helper invocation
//!
//! Uploading and URL persistence belong to the hosting deployment; this
//! module only bridges to whatever helper the operator configures. The
//! helper receives the receipt path as its final argument and is expected
//! to print the resulting URL on stdout.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Run the upload helper and return the reported URL
pub fn run(command: &str, receipt: &Path) -> Result<String> {
    let mut parts = command.split_whitespace();
    let program = parts.next().context("empty uploader command")?;

    info!("spawning uploader {program}");
    let output = Command::new(program)
        .args(parts)
        .arg(receipt)
        .output()
        .with_context(|| format!("failed to spawn uploader {program}"))?;

    if !output.status.success() {
        bail!(
            "uploader exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if url.is_empty() {
        bail!("uploader produced no URL");
    }
    Ok(url)
}
