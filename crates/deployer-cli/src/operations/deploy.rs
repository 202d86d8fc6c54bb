//! Contract deployment
//!
//! Builds the artifact source and network client from configuration, runs the
//! orchestrator and optionally writes a deployment record.

use super::{load_config, network_settings, Outcome};
use crate::cli::{commands::DeployCommand, output::Display};
use anyhow::{Context, Result};
use deployer_artifacts::FileArtifactProvider;
use deployer_config::ConfigBuilder;
use deployer_core::DeploymentOrchestrator;
use deployer_delivery::{signer_from_key, AlloyNetworkClient, NetworkClient};
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs the deploy command against the configured network.
///
/// Configuration and connection problems are returned as errors; everything
/// after the client is connected is expressed as an [`Outcome`].
pub async fn run(cmd: DeployCommand) -> Result<Outcome> {
	let config = load_config(&cmd.source)
		.await?
		.maybe(cmd.rpc_url.clone(), ConfigBuilder::rpc_url)
		.maybe(cmd.chain_id, ConfigBuilder::chain_id)
		.maybe(cmd.confirmations, ConfigBuilder::confirmations)
		.maybe(cmd.timeout, ConfigBuilder::timeout_seconds)
		.maybe(cmd.private_key.clone(), ConfigBuilder::private_key)
		.build()?;

	let signer = signer_from_key(&config.account.private_key)?;
	let client = AlloyNetworkClient::connect(network_settings(&config), signer)
		.await
		.context("failed to set up network client")?;

	let artifacts = Arc::new(FileArtifactProvider::new(&config.artifacts.dir));
	let orchestrator = DeploymentOrchestrator::new(artifacts);

	Ok(execute(
		&orchestrator,
		&client,
		&cmd.contract,
		cmd.record.as_deref(),
		ctrl_c(),
	)
	.await)
}

/// Deploys `contract` unless `shutdown` completes first.
///
/// An interrupted deployment may still land on chain; it is reported as
/// interrupted, never as not deployed.
pub async fn execute(
	orchestrator: &DeploymentOrchestrator,
	client: &dyn NetworkClient,
	contract: &str,
	record_path: Option<&Path>,
	shutdown: impl Future<Output = ()>,
) -> Outcome {
	tokio::select! {
		result = orchestrator.deploy_with_record(contract, client) => match result {
			Ok(record) => {
				if let Some(path) = record_path {
					match record.write_to(path).await {
						Ok(()) => info!(path = %path.display(), "Deployment record saved"),
						Err(e) => {
							warn!(path = %path.display(), error = %e, "Failed to write deployment record");
							Display::warning(&format!(
								"Contract is deployed but the record could not be written to {}: {}",
								path.display(),
								e
							));
						},
					}
				}
				Outcome::Deployed(record)
			},
			Err(e) => Outcome::Failed(e),
		},
		_ = shutdown => {
			warn!(contract = %contract, "Deployment interrupted; transaction may still be pending");
			Outcome::Interrupted { contract: contract.to_string() }
		},
	}
}

/// Completes on Ctrl-C. Never completes if the handler cannot be installed.
async fn ctrl_c() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		warn!(error = %e, "Failed to listen for Ctrl-C");
		std::future::pending::<()>().await;
	}
}
