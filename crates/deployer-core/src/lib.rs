//! Core orchestration for the contract deployer.
//!
//! Ties an artifact source and a network client together: resolve the
//! artifact, submit its creation transaction, wait for confirmation and
//! report the deployed address.

pub mod orchestrator;
pub mod record;

pub use orchestrator::DeploymentOrchestrator;
pub use record::DeploymentRecord;

use deployer_artifacts::ArtifactError;
use deployer_delivery::SubmissionError;
use deployer_types::{FailureReason, HandleError, TxHash};
use thiserror::Error;

/// Errors that can occur during a deployment.
///
/// None of these are retried; every variant ends the deployment.
#[derive(Debug, Error)]
pub enum DeploymentError {
	/// The requested contract has no usable compiled artifact.
	#[error("artifact not found: {0}")]
	ArtifactNotFound(#[from] ArtifactError),
	/// The network rejected the creation transaction before inclusion.
	#[error("submission failed: {0}")]
	Submission(#[from] SubmissionError),
	/// The transaction was submitted but never confirmed.
	#[error("confirmation failed for {tx_hash}: {reason}")]
	Confirmation {
		tx_hash: TxHash,
		reason: FailureReason,
	},
	/// The network client returned a handle that was already resolved.
	#[error("invalid deployment handle: {0}")]
	InvalidHandle(#[from] HandleError),
}

impl DeploymentError {
	/// Short machine-readable kind of this error.
	///
	/// Confirmation failures report the underlying reason (e.g. `timeout`).
	pub fn kind(&self) -> &'static str {
		match self {
			DeploymentError::ArtifactNotFound(_) => "artifact_not_found",
			DeploymentError::Submission(_) => "submission",
			DeploymentError::Confirmation { reason, .. } => reason.kind(),
			DeploymentError::InvalidHandle(_) => "invalid_handle",
		}
	}
}
