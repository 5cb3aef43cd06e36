// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::wait;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig file read and rewritten by context resolution
    pub kubeconfig_path: PathBuf,
    /// Bound applied to every condition wait
    pub wait_timeout: Duration,
    /// Interval between predicate evaluations
    pub poll_interval: Duration,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// conventional kubeconfig location and the default wait bounds.
    pub fn from_env() -> Self {
        let kubeconfig_path = env::var_os("KUBECONFIG")
            .map(PathBuf::from)
            .or_else(default_kubeconfig_path)
            .unwrap_or_else(|| PathBuf::from(".kube/config"));

        let wait_timeout = env::var("NUVCTL_WAIT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(wait::TIMEOUT_SECS));

        let poll_interval = env::var("NUVCTL_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(wait::POLL_INTERVAL_SECS));

        Config {
            kubeconfig_path,
            wait_timeout,
            poll_interval,
        }
    }
}

fn default_kubeconfig_path() -> Option<PathBuf> {
    home::home_dir().map(|h| h.join(".kube").join("config"))
}
