//! Transaction delivery module for the contract deployer.
//!
//! This module handles the submission and monitoring of contract-creation
//! transactions. It defines the network client interface the orchestrator
//! depends on and provides an EVM implementation backed by Alloy.
//!
//! Submission is never retried here: resubmitting a creation transaction
//! would create a second contract instance, so retry policy belongs to the
//! caller.

use alloy_primitives::Bytes;
use async_trait::async_trait;
use deployer_types::{DeployedAddress, DeploymentHandle, FailureReason};
use std::time::Duration;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod evm {
		pub mod alloy;
	}
}

pub use implementations::evm::alloy::{signer_from_key, AlloyNetworkClient};

/// Errors raised when the network rejects a creation transaction before inclusion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
	/// The creation payload was empty.
	#[error("empty bytecode provided for deployment")]
	EmptyBytecode,
	/// The node refused the transaction (malformed data, insufficient funds, nonce issues).
	#[error("transaction rejected: {0}")]
	Rejected(String),
	/// The node could not be reached while submitting.
	#[error("network error: {0}")]
	Network(String),
}

/// Errors that occur while setting up a network client.
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("invalid RPC URL: {0}")]
	InvalidUrl(String),
	#[error("invalid private key: {0}")]
	InvalidKey(String),
	#[error("failed to connect to {url}: {reason}")]
	Connection { url: String, reason: String },
	#[error("chain id mismatch: configured {expected}, node reports {actual}")]
	ChainMismatch { expected: u64, actual: u64 },
}

/// Connection and confirmation settings for a network client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSettings {
	/// HTTP JSON-RPC endpoint.
	pub rpc_url: String,
	/// Expected chain id; verified against the node on connect when set.
	pub chain_id: Option<u64>,
	/// Blocks required on top of (and including) the inclusion block.
	pub confirmations: u64,
	/// How long to wait for confirmation. `None` waits indefinitely.
	pub timeout: Option<Duration>,
	/// Interval between node polls while waiting.
	pub poll_interval: Duration,
}

impl Default for NetworkSettings {
	/// Settings for a local Hardhat node.
	fn default() -> Self {
		Self {
			rpc_url: "http://127.0.0.1:8545".to_string(),
			chain_id: Some(31337),
			confirmations: 1,
			timeout: None,
			poll_interval: Duration::from_secs(1),
		}
	}
}

/// Trait defining the interface for network clients able to deploy contracts.
///
/// Implementations sign and submit contract-creation transactions and watch
/// them until they are confirmed or definitively fail.
#[async_trait]
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait NetworkClient: Send + Sync {
	/// Signs and submits a contract-creation transaction.
	///
	/// Returns a pending handle once the network has accepted the transaction.
	/// Fails synchronously when the node rejects it.
	async fn submit_creation(&self, bytecode: Bytes) -> Result<DeploymentHandle, SubmissionError>;

	/// Waits until the transaction behind `handle` is confirmed or fails.
	///
	/// This is the only suspension point of a deployment. The handle itself is
	/// not modified; the caller applies the outcome.
	async fn await_confirmation(
		&self,
		handle: &DeploymentHandle,
	) -> Result<DeployedAddress, FailureReason>;
}
