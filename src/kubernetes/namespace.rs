// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Platform namespace lifecycle: creation, teardown, and the dependent CRD.

use k8s_openapi::api::core::v1::Namespace;
use kube::api::{DeleteParams, ObjectMeta, PostParams};
use tracing::debug;

use crate::config::Config;
use crate::constants::WHISK_CRD_NAME;
use crate::error::Result;
use crate::kubernetes::ClusterClient;
use crate::wait;

/// What a `create_namespace` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

/// What a `cleanup` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// Namespace was absent, no deletes issued
    NothingToDo,
    /// CRD and namespace deleted, termination observed
    Deleted,
}

impl ClusterClient {
    /// Fetch a namespace, mapping a 404 to `None`. Absence is a legitimate
    /// state here, not a failure; every other error propagates.
    pub async fn get_namespace_named(&self, name: &str) -> Result<Option<Namespace>> {
        match self.namespaces().get(name).await {
            Ok(ns) => Ok(Some(ns)),
            Err(kube::Error::Api(err)) if err.code == 404 => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// The platform namespace, if present
    pub async fn get_namespace(&self) -> Result<Option<Namespace>> {
        let name = self.namespace().to_string();
        self.get_namespace_named(&name).await
    }

    /// Create the platform namespace if absent. Safe to call repeatedly: a
    /// second invocation issues no create.
    pub async fn create_namespace(&self) -> Result<CreateOutcome> {
        if self.get_namespace().await?.is_some() {
            println!("namespace {} already exists...skipping", self.namespace());
            return Ok(CreateOutcome::AlreadyExists);
        }

        let ns = Namespace {
            metadata: ObjectMeta {
                name: Some(self.namespace().to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        self.namespaces().create(&PostParams::default(), &ns).await?;

        println!("✓ Namespace {} created", self.namespace());
        Ok(CreateOutcome::Created)
    }

    /// Tear down the platform namespace and the CRD it depends on.
    ///
    /// The CRD goes first: its finalizers would otherwise pin the namespace
    /// in Terminating indefinitely. A CRD that is already gone (404) does
    /// not stop a re-run over a partial teardown; any other CRD delete
    /// failure aborts before the namespace delete is attempted. The final
    /// wait blocks until the namespace is actually gone, and its timeout is
    /// an error, not a success.
    pub async fn cleanup(&self, config: &Config) -> Result<CleanupOutcome> {
        if self.get_namespace().await?.is_none() {
            println!("{} namespace not found. Nothing to do.", self.namespace());
            return Ok(CleanupOutcome::NothingToDo);
        }

        match self.crds().delete(WHISK_CRD_NAME, &DeleteParams::default()).await {
            Ok(_) => debug!("Deleted CRD {}", WHISK_CRD_NAME),
            Err(kube::Error::Api(err)) if err.code == 404 => {
                debug!("CRD {} already absent", WHISK_CRD_NAME)
            }
            Err(e) => return Err(e.into()),
        }

        let name = self.namespace().to_string();
        self.namespaces().delete(&name, &DeleteParams::default()).await?;

        println!(
            "waiting for {} namespace to be terminated...a little patience please",
            name
        );
        wait::wait_for_namespace_terminated(self, &name, config.poll_interval, config.wait_timeout)
            .await?;

        println!("{} cleanup done.", name);
        Ok(CleanupOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NuvctlError;
    use crate::test_utils::{deleted_json, namespace_json, not_found_json, MockService};
    use std::path::PathBuf;
    use std::time::Duration;

    const NS_PATH: &str = "/api/v1/namespaces/nuvolaris";
    const CRD_PATH: &str =
        "/apis/apiextensions.k8s.io/v1/customresourcedefinitions/whisks.nuvolaris.org";

    fn test_config() -> Config {
        Config {
            kubeconfig_path: PathBuf::from("/dev/null"),
            wait_timeout: Duration::from_millis(100),
            poll_interval: Duration::from_millis(5),
        }
    }

    #[tokio::test]
    async fn test_get_namespace_absent_maps_to_none() {
        let mock = MockService::new().on_get(
            NS_PATH,
            404,
            &not_found_json("namespaces", "nuvolaris"),
        );
        let cluster = ClusterClient::with_client(mock.into_client());

        assert!(cluster.get_namespace().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_namespace_other_error_propagates() {
        let mock = MockService::new().on_get(
            NS_PATH,
            503,
            r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"unavailable","reason":"ServiceUnavailable","code":503}"#,
        );
        let cluster = ClusterClient::with_client(mock.into_client());

        assert!(matches!(
            cluster.get_namespace().await,
            Err(NuvctlError::Kube(_))
        ));
    }

    #[tokio::test]
    async fn test_create_namespace_when_absent() {
        let mock = MockService::new()
            .on_get(NS_PATH, 404, &not_found_json("namespaces", "nuvolaris"))
            .on_post("/api/v1/namespaces", 201, &namespace_json("nuvolaris"));
        let cluster = ClusterClient::with_client(mock.clone().into_client());

        let outcome = cluster.create_namespace().await.unwrap();
        assert_eq!(outcome, CreateOutcome::Created);
        assert_eq!(mock.count_method("POST"), 1);
    }

    #[tokio::test]
    async fn test_create_namespace_is_idempotent() {
        // first GET sees nothing, every later one sees the created namespace
        let mock = MockService::new()
            .on_get(NS_PATH, 404, &not_found_json("namespaces", "nuvolaris"))
            .on_get(NS_PATH, 200, &namespace_json("nuvolaris"))
            .on_post("/api/v1/namespaces", 201, &namespace_json("nuvolaris"));
        let cluster = ClusterClient::with_client(mock.clone().into_client());

        assert_eq!(cluster.create_namespace().await.unwrap(), CreateOutcome::Created);
        assert_eq!(
            cluster.create_namespace().await.unwrap(),
            CreateOutcome::AlreadyExists
        );
        // exactly one remote create across both calls
        assert_eq!(mock.count_method("POST"), 1);
    }

    #[tokio::test]
    async fn test_cleanup_absent_namespace_issues_no_deletes() {
        let mock = MockService::new().on_get(
            NS_PATH,
            404,
            &not_found_json("namespaces", "nuvolaris"),
        );
        let cluster = ClusterClient::with_client(mock.clone().into_client());

        let outcome = cluster.cleanup(&test_config()).await.unwrap();
        assert_eq!(outcome, CleanupOutcome::NothingToDo);
        assert_eq!(mock.count_method("DELETE"), 0);
    }

    #[tokio::test]
    async fn test_cleanup_full_teardown() {
        let mock = MockService::new()
            .on_get(NS_PATH, 200, &namespace_json("nuvolaris"))
            .on_get(NS_PATH, 404, &not_found_json("namespaces", "nuvolaris"))
            .on_delete(CRD_PATH, 200, &deleted_json("whisks.nuvolaris.org"))
            .on_delete(NS_PATH, 200, &deleted_json("nuvolaris"));
        let cluster = ClusterClient::with_client(mock.clone().into_client());

        let outcome = cluster.cleanup(&test_config()).await.unwrap();
        assert_eq!(outcome, CleanupOutcome::Deleted);

        let deletes: Vec<_> = mock
            .requests()
            .into_iter()
            .filter(|(m, _)| m == "DELETE")
            .collect();
        // CRD delete strictly before the namespace delete
        assert_eq!(deletes.len(), 2);
        assert_eq!(deletes[0].1, CRD_PATH);
        assert_eq!(deletes[1].1, NS_PATH);
    }

    #[tokio::test]
    async fn test_cleanup_aborts_when_crd_delete_fails() {
        let mock = MockService::new()
            .on_get(NS_PATH, 200, &namespace_json("nuvolaris"))
            .on_delete(
                CRD_PATH,
                500,
                r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"boom","reason":"InternalError","code":500}"#,
            );
        let cluster = ClusterClient::with_client(mock.clone().into_client());

        assert!(cluster.cleanup(&test_config()).await.is_err());
        // the namespace delete must not have been attempted
        let ns_deletes = mock
            .requests()
            .into_iter()
            .filter(|(m, p)| m == "DELETE" && p == NS_PATH)
            .count();
        assert_eq!(ns_deletes, 0);
    }

    #[tokio::test]
    async fn test_cleanup_tolerates_crd_already_gone() {
        let mock = MockService::new()
            .on_get(NS_PATH, 200, &namespace_json("nuvolaris"))
            .on_get(NS_PATH, 404, &not_found_json("namespaces", "nuvolaris"))
            .on_delete(
                CRD_PATH,
                404,
                &not_found_json("customresourcedefinitions", "whisks.nuvolaris.org"),
            )
            .on_delete(NS_PATH, 200, &deleted_json("nuvolaris"));
        let cluster = ClusterClient::with_client(mock.clone().into_client());

        let outcome = cluster.cleanup(&test_config()).await.unwrap();
        assert_eq!(outcome, CleanupOutcome::Deleted);
    }

    #[tokio::test]
    async fn test_cleanup_fails_when_namespace_delete_fails() {
        let mock = MockService::new()
            .on_get(NS_PATH, 200, &namespace_json("nuvolaris"))
            .on_delete(CRD_PATH, 200, &deleted_json("whisks.nuvolaris.org"))
            .on_delete(
                NS_PATH,
                500,
                r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"boom","reason":"InternalError","code":500}"#,
            );
        let cluster = ClusterClient::with_client(mock.into_client());

        assert!(cluster.cleanup(&test_config()).await.is_err());
    }

    #[tokio::test]
    async fn test_cleanup_times_out_when_namespace_never_terminates() {
        // namespace GET keeps answering 200, so the termination wait expires
        let mock = MockService::new()
            .on_get(NS_PATH, 200, &namespace_json("nuvolaris"))
            .on_delete(CRD_PATH, 200, &deleted_json("whisks.nuvolaris.org"))
            .on_delete(NS_PATH, 200, &deleted_json("nuvolaris"));
        let cluster = ClusterClient::with_client(mock.into_client());

        let result = cluster.cleanup(&test_config()).await;
        assert!(matches!(result, Err(NuvctlError::WaitTimeout(_))));
    }
}
