// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client construction, kubeconfig context resolution, and namespace
//! lifecycle management.

pub mod client;
pub mod context;
pub mod namespace;

pub use client::ClusterClient;
pub use context::resolve_platform_context;
pub use namespace::{CleanupOutcome, CreateOutcome};
