// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace every platform resource lives in
pub const PLATFORM_NAMESPACE: &str = "nuvolaris";

/// Substring identifying the platform's kubeconfig context
pub const PLATFORM_CONTEXT: &str = "nuvolaris";

/// CRD the platform namespace depends on; must be deleted first or the
/// namespace hangs in Terminating on its finalizers
pub const WHISK_CRD_NAME: &str = "whisks.nuvolaris.org";

/// Name passed to the cluster bootstrap tool (context becomes kind-nuvolaris)
pub const DEVCLUSTER_NAME: &str = "nuvolaris";

/// File the embedded deployment descriptor is written to
pub const DEPLOY_MANIFEST_FILE: &str = "nuvolaris.yml";

/// Condition polling configuration
pub mod wait {
    /// Interval between predicate evaluations in seconds
    pub const POLL_INTERVAL_SECS: u64 = 1;
    /// Bound on every wait in seconds
    pub const TIMEOUT_SECS: u64 = 120;
}

/// OpenWhisk credentials written for downstream tooling.
/// Static fixture values matching the devcluster deployment.
pub mod whisk {
    pub const AUTH: &str = "23bc46b1-71f6-4ed5-8c54-816aa4f8c502:123zO3xZCLrMN6v2BKK1dXYFpXlPkccOFqm12CdAsMgRU4VrNZ9lyGVCGuMDGIwP";
    pub const APIHOST: &str = "http://localhost:3233";
    /// Env var downstream tooling reads to locate the properties file
    pub const CONFIG_FILE_ENV: &str = "WSK_CONFIG_FILE";
    pub const PROPS_FILE: &str = ".wskprops";
}
