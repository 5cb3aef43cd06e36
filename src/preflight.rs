// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Checks that run strictly before a deploy and can veto it.

use tokio::process::Command;
use tracing::debug;

use crate::error::{NuvctlError, Result};

/// Run the preflight checks. Any failure aborts the deploy sequence.
pub async fn run() -> Result<()> {
    if home::home_dir().is_none() {
        return Err(NuvctlError::HomeDirNotFound);
    }

    // kind needs a reachable container runtime
    let docker = Command::new("docker")
        .arg("version")
        .output()
        .await
        .map_err(|e| NuvctlError::Preflight(format!("docker not found: {}", e)))?;

    if !docker.status.success() {
        return Err(NuvctlError::Preflight(
            "docker daemon not reachable".to_string(),
        ));
    }

    debug!("Preflight checks passed");
    Ok(())
}
