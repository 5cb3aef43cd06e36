// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The deploy sequence: preflight, cluster setup, manifest hand-off.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::debug;

use crate::config::Config;
use crate::constants::DEPLOY_MANIFEST_FILE;
use crate::error::{NuvctlError, Result};
use crate::kubernetes::ClusterClient;
use crate::preflight;
use crate::properties;

/// Deployment descriptor compiled into the binary; opaque here, consumed by
/// the task runner and the in-cluster operator.
static DEPLOY_MANIFEST: &[u8] = include_bytes!("../embed/nuvolaris.yml");

#[derive(Debug, Default)]
pub struct DeployOptions {
    /// Arguments forwarded verbatim to the task runner
    pub args: Vec<String>,
    /// Bootstrap a local devcluster before anything else
    pub devcluster: bool,
    /// Skip the preflight checks
    pub no_preflight_checks: bool,
}

/// Deploy the platform: optional devcluster bootstrap, context resolution,
/// namespace setup, then hand-off to the task runner that applies the
/// written manifest.
pub async fn run(config: &Config, opts: &DeployOptions) -> Result<()> {
    if !opts.no_preflight_checks {
        preflight::run().await?;
    }

    println!("Deploying Nuvolaris...");

    let cluster = ClusterClient::init(config, opts.devcluster).await?;
    cluster.create_namespace().await?;

    properties::write_properties_file()?;

    let manifest = write_manifest(Path::new("."))?;
    debug!("Deployment descriptor written to {}", manifest.display());

    hand_off(&opts.args).await
}

/// Write the embedded deployment descriptor into `dir`, owner-only.
pub fn write_manifest(dir: &Path) -> Result<PathBuf> {
    properties::write_owner_only(dir, DEPLOY_MANIFEST_FILE, DEPLOY_MANIFEST)
}

/// Run the external task runner against the written manifest. Its exit
/// status is the only signal consumed; output streams straight through to
/// the operator.
async fn hand_off(args: &[String]) -> Result<()> {
    let status = Command::new("task")
        .args(args)
        .status()
        .await
        .map_err(|e| NuvctlError::TaskRunner(format!("failed to run task: {}", e)))?;

    if !status.success() {
        return Err(NuvctlError::TaskRunner(format!(
            "exited with {}",
            status.code().map_or("signal".to_string(), |c| c.to_string())
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn test_manifest_written_owner_only() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_manifest(dir.path()).unwrap();
        assert!(path.ends_with("nuvolaris.yml"));

        let meta = std::fs::metadata(&path).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o600);
        assert_eq!(std::fs::read(&path).unwrap(), DEPLOY_MANIFEST);
        assert!(!DEPLOY_MANIFEST.is_empty());
    }
}
