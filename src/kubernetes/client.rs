// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client construction.

use k8s_openapi::api::core::v1::{Namespace, Pod};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config as KConfig};
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::PLATFORM_NAMESPACE;
use crate::devcluster;
use crate::error::{NuvctlError, Result};
use crate::kubernetes::context::resolve_platform_context;

/// Handle to the target cluster, created once per invocation.
///
/// A single [`kube::Client`] serves both the core group (namespaces, pods)
/// and the apiextensions group (CRDs); typed [`Api`] views are derived from
/// it on demand. All cluster operations borrow this handle.
pub struct ClusterClient {
    client: Client,
    config: KConfig,
    namespace: String,
}

impl ClusterClient {
    /// Build a handle to the platform cluster, optionally bootstrapping a
    /// local devcluster first.
    ///
    /// The platform context is resolved and persisted before the connection
    /// configuration is built, so the client talks to the intended cluster
    /// regardless of what the operator's shell left as current. An
    /// unreadable kubeconfig and an unresolvable context both surface as
    /// [`NuvctlError::ClusterNotRunning`]; both are fixed the same way.
    pub async fn init(config: &Config, create_devcluster: bool) -> Result<ClusterClient> {
        if create_devcluster {
            println!("Starting devcluster...");
            devcluster::manage(&["create".to_string()]).await?;
        }

        let kubeconfig = Kubeconfig::read_from(&config.kubeconfig_path)
            .map_err(|_| NuvctlError::ClusterNotRunning)?;

        let context = resolve_platform_context(&config.kubeconfig_path)
            .map_err(|_| NuvctlError::ClusterNotRunning)?;

        let options = KubeConfigOptions {
            context: Some(context.clone()),
            ..KubeConfigOptions::default()
        };
        let client_config = KConfig::from_custom_kubeconfig(kubeconfig, &options)
            .await
            .map_err(|e| NuvctlError::Kubeconfig(e.to_string()))?;

        let client = Client::try_from(client_config.clone())?;
        debug!("Cluster client built for context {}", context);
        info!(
            "Connected to cluster at {} (namespace {})",
            client_config.cluster_url, PLATFORM_NAMESPACE
        );

        Ok(ClusterClient {
            client,
            config: client_config,
            namespace: PLATFORM_NAMESPACE.to_string(),
        })
    }

    /// Target namespace every platform resource lives in
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolved connection configuration
    pub fn config(&self) -> &KConfig {
        &self.config
    }

    pub fn namespaces(&self) -> Api<Namespace> {
        Api::all(self.client.clone())
    }

    pub fn crds(&self) -> Api<CustomResourceDefinition> {
        Api::all(self.client.clone())
    }

    /// Pods in the target namespace
    pub fn pods(&self) -> Api<Pod> {
        Api::namespaced(self.client.clone(), &self.namespace)
    }

    /// Wrap an existing client, bound to the platform namespace.
    #[cfg(test)]
    pub fn with_client(client: Client) -> ClusterClient {
        ClusterClient {
            client,
            config: KConfig::new("http://localhost:8080".parse().unwrap()),
            namespace: PLATFORM_NAMESPACE.to_string(),
        }
    }
}
