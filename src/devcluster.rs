// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Local devcluster bootstrap via the external `kind` binary.
//!
//! The tool is opaque to the rest of the crate: a verb plus pass-through
//! arguments go in, its exit status comes out. Retries are its business,
//! not ours.

use tokio::process::Command;
use tracing::debug;

use crate::constants::DEVCLUSTER_NAME;
use crate::error::{NuvctlError, Result};

/// Forward `args` to the bootstrap tool. The `create` and `delete` verbs
/// get the fixed cluster name appended so the resulting kubeconfig context
/// (`kind-nuvolaris`) matches what context resolution looks for; anything
/// else passes through verbatim.
pub async fn manage(args: &[String]) -> Result<()> {
    let mut cmd = Command::new("kind");

    match args.first().map(String::as_str) {
        Some("create") | Some("delete") => {
            cmd.arg(&args[0]).arg("cluster").arg("--name").arg(DEVCLUSTER_NAME);
            cmd.args(&args[1..]);
        }
        _ => {
            cmd.args(args);
        }
    }

    debug!("Running bootstrap tool: {:?}", cmd);
    let output = cmd
        .output()
        .await
        .map_err(|e| NuvctlError::Provision(format!("failed to run kind: {}", e)))?;

    if !output.status.success() {
        return Err(NuvctlError::Provision(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(())
}
