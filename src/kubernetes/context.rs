// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubeconfig context resolution.

use std::io::Write;
use std::path::Path;

use kube::config::Kubeconfig;
use tracing::{debug, warn};

use crate::constants::PLATFORM_CONTEXT;
use crate::error::{NuvctlError, Result};

/// Make the platform's context the current one in the kubeconfig at `path`.
///
/// Contexts are scanned in document order and the first whose name contains
/// the platform identifier wins; further matches are ignored with a warning.
/// The rewritten file keeps every unrelated context, cluster, and user.
/// Returns the selected context name.
pub fn resolve_platform_context(path: &Path) -> Result<String> {
    let mut kubeconfig =
        Kubeconfig::read_from(path).map_err(|e| NuvctlError::Kubeconfig(e.to_string()))?;

    let mut matches = kubeconfig
        .contexts
        .iter()
        .filter(|c| c.name.contains(PLATFORM_CONTEXT))
        .map(|c| c.name.clone());

    let selected = matches.next().ok_or(NuvctlError::ContextNotFound)?;
    let ignored: Vec<String> = matches.collect();
    if !ignored.is_empty() {
        warn!(
            "Multiple contexts match {}: using {}, ignoring {:?}",
            PLATFORM_CONTEXT, selected, ignored
        );
    }

    if kubeconfig.current_context.as_deref() == Some(selected.as_str()) {
        debug!("Context {} already current, kubeconfig left untouched", selected);
    } else {
        kubeconfig.current_context = Some(selected.clone());
        persist_kubeconfig(&kubeconfig, path)?;
    }

    println!("✓ Current context set to {}", selected);
    Ok(selected)
}

/// Replace the kubeconfig atomically: serialize into a temp file in the same
/// directory, then rename over the original. A crash mid-write never leaves
/// a half-written config.
fn persist_kubeconfig(kubeconfig: &Kubeconfig, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(kubeconfig)
        .map_err(|e| NuvctlError::Kubeconfig(e.to_string()))?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(yaml.as_bytes())?;
    tmp.persist(path)
        .map_err(|e| NuvctlError::Kubeconfig(format!("failed to persist kubeconfig: {}", e)))?;

    Ok(())
}
