// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::{Parser, Subcommand};

use nuvctl::config::Config;
use nuvctl::deploy::{self, DeployOptions};
use nuvctl::devcluster;
use nuvctl::kubernetes::ClusterClient;

#[derive(Parser)]
#[command(name = "nuvctl")]
#[command(about = "Deploy the nuvolaris platform on a Kubernetes cluster")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy the platform: namespace setup, manifest write, task hand-off
    Deploy {
        /// Arguments passed through to the task runner
        args: Vec<String>,

        /// Bootstrap a local devcluster first
        #[arg(long)]
        devcluster: bool,

        /// Disable preflight checks
        #[arg(long)]
        no_preflight_checks: bool,
    },

    /// Manage the local devcluster; arguments go to the bootstrap tool verbatim
    Devcluster {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Tear down the platform namespace and the CRD it depends on
    Cleanup,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Deploy {
            args,
            devcluster,
            no_preflight_checks,
        } => {
            let opts = DeployOptions {
                args,
                devcluster,
                no_preflight_checks,
            };
            deploy::run(&config, &opts).await?;
        }
        Commands::Devcluster { args } => {
            devcluster::manage(&args).await?;
        }
        Commands::Cleanup => {
            let cluster = ClusterClient::init(&config, false).await?;
            cluster.cleanup(&config).await?;
        }
    }

    Ok(())
}
