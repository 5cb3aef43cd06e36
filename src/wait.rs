// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Bounded condition polling against live cluster state.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::error::{NuvctlError, Result};
use crate::kubernetes::ClusterClient;

/// Outcome of a single predicate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Condition not met yet, keep polling
    Pending,
    /// Condition met
    Ready,
}

/// Evaluate `check` at most once per `interval` until it reports
/// [`PollState::Ready`], it fails, or `timeout` elapses.
///
/// The first evaluation happens immediately. A predicate error is returned
/// as-is and ends the wait; the predicate is not invoked again. Each
/// attempt prints a progress marker, the only operator feedback during a
/// long wait.
pub async fn poll_until<F, Fut>(interval: Duration, timeout: Duration, mut check: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<PollState>>,
{
    let start = Instant::now();

    loop {
        print!(".");
        let _ = std::io::stdout().flush();

        if let PollState::Ready = check().await? {
            return Ok(());
        }

        if start.elapsed() >= timeout {
            return Err(NuvctlError::WaitTimeout(timeout));
        }

        sleep(interval).await;
    }
}

/// Classify a pod's phase for a running-wait.
///
/// Pending keeps the wait alive, Running satisfies it, and the terminal
/// phases fail it. An unrecognized or missing phase keeps polling; only a
/// terminal phase or the timeout ends the wait early.
pub async fn pod_running(cluster: &ClusterClient, pod_name: &str) -> Result<PollState> {
    let pod = cluster.pods().get(pod_name).await?;

    match pod.status.as_ref().and_then(|s| s.phase.as_deref()) {
        Some("Pending") => Ok(PollState::Pending),
        Some("Running") => Ok(PollState::Ready),
        Some("Failed") | Some("Succeeded") | Some("Unknown") => Err(NuvctlError::PodFailed),
        _ => Ok(PollState::Pending),
    }
}

/// A namespace is terminated once a fetch reports it absent. Only a 404
/// counts as absence; any other fetch error propagates instead of being
/// mistaken for completed termination.
pub async fn namespace_terminated(cluster: &ClusterClient, name: &str) -> Result<PollState> {
    match cluster.get_namespace_named(name).await? {
        None => Ok(PollState::Ready),
        Some(_) => Ok(PollState::Pending),
    }
}

pub async fn wait_for_pod_running(
    cluster: &ClusterClient,
    pod_name: &str,
    interval: Duration,
    timeout: Duration,
) -> Result<()> {
    poll_until(interval, timeout, || pod_running(cluster, pod_name)).await
}

pub async fn wait_for_namespace_terminated(
    cluster: &ClusterClient,
    name: &str,
    interval: Duration,
    timeout: Duration,
) -> Result<()> {
    poll_until(interval, timeout, || namespace_terminated(cluster, name)).await
}
