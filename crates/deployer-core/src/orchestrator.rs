//! Deployment orchestrator.
//!
//! Runs a single deployment: resolve the artifact, submit its creation
//! transaction, wait for confirmation, return the address. Submission always
//! precedes the wait and the wait always precedes address retrieval. Nothing
//! is retried and nothing is cached between calls.

use crate::{DeploymentError, DeploymentRecord};
use deployer_artifacts::ArtifactProvider;
use deployer_delivery::NetworkClient;
use deployer_types::{ConfirmationStatus, DeployedAddress};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Orchestrates contract deployments against a network client.
pub struct DeploymentOrchestrator {
	artifacts: Arc<dyn ArtifactProvider>,
}

impl DeploymentOrchestrator {
	pub fn new(artifacts: Arc<dyn ArtifactProvider>) -> Self {
		Self { artifacts }
	}

	/// Deploys the named contract and returns its address.
	///
	/// Sends exactly one creation transaction per call.
	pub async fn deploy(
		&self,
		name: &str,
		client: &dyn NetworkClient,
	) -> Result<DeployedAddress, DeploymentError> {
		self.deploy_with_record(name, client)
			.await
			.map(|record| record.address)
	}

	/// Deploys the named contract and returns the full deployment record.
	#[instrument(skip_all, fields(contract = %name))]
	pub async fn deploy_with_record(
		&self,
		name: &str,
		client: &dyn NetworkClient,
	) -> Result<DeploymentRecord, DeploymentError> {
		let artifact = self.artifacts.resolve(name).await.map_err(|e| {
			error!(contract = %name, error = %e, "Artifact resolution failed");
			DeploymentError::ArtifactNotFound(e)
		})?;
		info!(
			contract = %name,
			artifact = %artifact.qualified_name(),
			bytecode_len = artifact.bytecode.len(),
			"Resolved artifact"
		);

		let mut handle = client
			.submit_creation(artifact.bytecode.clone())
			.await
			.map_err(|e| {
				error!(contract = %name, error = %e, "Submission failed");
				DeploymentError::Submission(e)
			})?;
		info!(
			contract = %name,
			tx_hash = %handle.tx_hash(),
			chain_id = handle.chain_id(),
			"Creation transaction submitted"
		);

		let outcome = client.await_confirmation(&handle).await;
		handle.resolve(outcome)?;

		if let ConfirmationStatus::Failed(reason) = handle.status() {
			error!(
				contract = %name,
				tx_hash = %handle.tx_hash(),
				reason = %reason,
				"Deployment failed"
			);
			return Err(DeploymentError::Confirmation {
				tx_hash: handle.tx_hash(),
				reason: reason.clone(),
			});
		}

		let address = handle.address()?;
		info!(
			contract = %name,
			tx_hash = %handle.tx_hash(),
			chain_id = handle.chain_id(),
			address = %address,
			"Contract deployed"
		);

		Ok(DeploymentRecord::new(&artifact, &handle, address))
	}
}
