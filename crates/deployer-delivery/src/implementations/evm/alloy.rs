//! Alloy-based EVM network client.
//!
//! Submits contract-creation transactions through an HTTP provider that signs
//! with a local private key, and watches them with Alloy's pending transaction
//! machinery until the configured number of confirmations is reached.

use crate::{ClientError, NetworkClient, NetworkSettings, SubmissionError};
use alloy_network::{EthereumWallet, ReceiptResponse, TransactionBuilder};
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::{
	DynProvider, PendingTransactionConfig, PendingTransactionError, Provider, ProviderBuilder,
	WatchTxError,
};
use alloy_rpc_types::TransactionRequest;
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use deployer_types::{DeployedAddress, DeploymentHandle, FailureReason};
use tracing::{debug, error, info, warn};

/// Parses a hex-encoded private key (with or without 0x prefix).
pub fn signer_from_key(private_key: &str) -> Result<PrivateKeySigner, ClientError> {
	private_key
		.trim()
		.parse::<PrivateKeySigner>()
		.map_err(|e| ClientError::InvalidKey(e.to_string()))
}

/// Alloy-based EVM network client.
///
/// Holds a single provider whose wallet signs every creation transaction with
/// the configured account. Nonce, gas and chain id are filled by the
/// provider's recommended fillers.
pub struct AlloyNetworkClient {
	provider: DynProvider,
	settings: NetworkSettings,
	sender: Address,
	chain_id: u64,
}

impl AlloyNetworkClient {
	/// Creates a client without contacting the node.
	///
	/// The chain id recorded on handles is the configured one until
	/// [`AlloyNetworkClient::connect`] verifies it.
	pub fn new(settings: NetworkSettings, signer: PrivateKeySigner) -> Result<Self, ClientError> {
		let url = settings
			.rpc_url
			.parse()
			.map_err(|e| ClientError::InvalidUrl(format!("{}: {}", settings.rpc_url, e)))?;

		let signer = match settings.chain_id {
			Some(chain_id) => signer.with_chain_id(Some(chain_id)),
			None => signer,
		};
		let sender = signer.address();
		let wallet = EthereumWallet::from(signer);

		let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);
		provider.client().set_poll_interval(settings.poll_interval);

		Ok(Self {
			provider: provider.erased(),
			chain_id: settings.chain_id.unwrap_or_default(),
			settings,
			sender,
		})
	}

	/// Creates a client and verifies the node is reachable and on the expected chain.
	pub async fn connect(
		settings: NetworkSettings,
		signer: PrivateKeySigner,
	) -> Result<Self, ClientError> {
		let mut client = Self::new(settings, signer)?;

		let actual = client
			.provider
			.get_chain_id()
			.await
			.map_err(|e| ClientError::Connection {
				url: client.settings.rpc_url.clone(),
				reason: e.to_string(),
			})?;

		if let Some(expected) = client.settings.chain_id {
			if expected != actual {
				return Err(ClientError::ChainMismatch { expected, actual });
			}
		}
		client.chain_id = actual;

		info!(
			rpc_url = %client.settings.rpc_url,
			chain_id = actual,
			sender = %client.sender,
			"Connected to network"
		);
		Ok(client)
	}

	/// Account that signs creation transactions.
	pub fn sender(&self) -> Address {
		self.sender
	}

	pub fn chain_id(&self) -> u64 {
		self.chain_id
	}

	fn timeout_secs(&self) -> u64 {
		self.settings.timeout.map(|t| t.as_secs()).unwrap_or_default()
	}

	/// Refines a failed wait. A timed-out transaction the node no longer
	/// knows was dropped or replaced.
	async fn classify_unconfirmed(&self, tx_hash: TxHash, reason: FailureReason) -> FailureReason {
		if !matches!(reason, FailureReason::Timeout { .. }) {
			return reason;
		}

		match self.provider.get_transaction_by_hash(tx_hash).await {
			Ok(None) => {
				warn!(tx_hash = %tx_hash, "Transaction no longer known to the node");
				FailureReason::Dropped
			},
			_ => reason,
		}
	}

	/// Reads the receipt of a confirmed transaction and extracts the created address.
	async fn receipt_outcome(&self, tx_hash: TxHash) -> Result<DeployedAddress, FailureReason> {
		let receipt = self
			.provider
			.get_transaction_receipt(tx_hash)
			.await
			.map_err(|e| FailureReason::Network(format!("Failed to get receipt: {}", e)))?
			.ok_or(FailureReason::Dropped)?;

		if !receipt.status() {
			warn!(tx_hash = %tx_hash, "Contract creation reverted");
			return Err(FailureReason::Reverted);
		}

		receipt
			.contract_address()
			.map(DeployedAddress::new)
			.ok_or(FailureReason::MissingAddress)
	}
}

/// Maps a pending-transaction watcher error to a confirmation failure.
fn watch_failure(err: PendingTransactionError, waited_secs: u64) -> FailureReason {
	match err {
		PendingTransactionError::TxWatcher(WatchTxError::Timeout) => {
			FailureReason::Timeout { waited_secs }
		},
		other => FailureReason::Network(other.to_string()),
	}
}

#[async_trait]
impl NetworkClient for AlloyNetworkClient {
	async fn submit_creation(&self, bytecode: Bytes) -> Result<DeploymentHandle, SubmissionError> {
		if bytecode.is_empty() {
			return Err(SubmissionError::EmptyBytecode);
		}

		debug!(
			chain_id = self.chain_id,
			from = %self.sender,
			data_len = bytecode.len(),
			"Sending contract creation transaction"
		);

		let request = TransactionRequest::default()
			.with_from(self.sender)
			.with_deploy_code(bytecode);

		let pending = self.provider.send_transaction(request).await.map_err(|e| {
			error!(chain_id = self.chain_id, "Contract creation submission failed: {}", e);
			if e.as_error_resp().is_some() {
				SubmissionError::Rejected(e.to_string())
			} else {
				SubmissionError::Network(e.to_string())
			}
		})?;

		let tx_hash = *pending.tx_hash();
		info!(tx_hash = %tx_hash, chain_id = self.chain_id, "Contract creation transaction submitted");

		Ok(DeploymentHandle::new(tx_hash, self.chain_id, self.sender))
	}

	async fn await_confirmation(
		&self,
		handle: &DeploymentHandle,
	) -> Result<DeployedAddress, FailureReason> {
		let tx_hash = handle.tx_hash();

		match self.settings.timeout {
			Some(timeout) => info!(
				tx_hash = %tx_hash,
				"Waiting for {} confirmations (timeout: {}s)",
				self.settings.confirmations,
				timeout.as_secs()
			),
			None => info!(
				tx_hash = %tx_hash,
				"Waiting for {} confirmations",
				self.settings.confirmations
			),
		}

		let config = PendingTransactionConfig::new(tx_hash)
			.with_required_confirmations(self.settings.confirmations)
			.with_timeout(self.settings.timeout);

		let pending = self
			.provider
			.watch_pending_transaction(config)
			.await
			.map_err(|e| watch_failure(e, self.timeout_secs()))?;

		if let Err(e) = pending.await {
			return Err(self
				.classify_unconfirmed(tx_hash, watch_failure(e, self.timeout_secs()))
				.await);
		}

		let address = self.receipt_outcome(tx_hash).await?;
		info!(tx_hash = %tx_hash, address = %address, "Contract creation confirmed");
		Ok(address)
	}
}
