// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NuvctlError {
    #[error("looks like the nuvolaris cluster is not running. Run `nuvctl devcluster create` or `nuvctl deploy --devcluster`")]
    ClusterNotRunning,

    #[error("context nuvolaris not found")]
    ContextNotFound,

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to process kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("timed out after {0:?} waiting for condition")]
    WaitTimeout(Duration),

    #[error("pod cannot start...aborting")]
    PodFailed,

    #[error("devcluster bootstrap failed: {0}")]
    Provision(String),

    #[error("task runner failed: {0}")]
    TaskRunner(String),

    #[error("preflight check failed: {0}")]
    Preflight(String),

    #[error("home directory not resolvable")]
    HomeDirNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NuvctlError>;
