//! Deployment handle and deployed address types.
//!
//! A [`DeploymentHandle`] is created by a network client when it accepts a
//! contract-creation transaction. Its status starts as `Pending` and moves
//! exactly once to either `Confirmed` or `Failed`; the deployed address can
//! only be read from a confirmed handle.

use crate::FailureReason;
use alloy_primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Address of a contract instance created by a confirmed deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeployedAddress(Address);

impl DeployedAddress {
	pub fn new(address: Address) -> Self {
		Self(address)
	}

	pub fn address(&self) -> Address {
		self.0
	}
}

impl fmt::Display for DeployedAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// Address renders as EIP-55 checksummed hex.
		write!(f, "{}", self.0)
	}
}

impl From<Address> for DeployedAddress {
	fn from(address: Address) -> Self {
		Self(address)
	}
}

impl FromStr for DeployedAddress {
	type Err = alloy_primitives::hex::FromHexError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Address::from_str(s).map(Self)
	}
}

/// Confirmation status of a deployment transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ConfirmationStatus {
	Pending,
	Confirmed(DeployedAddress),
	Failed(FailureReason),
}

impl ConfirmationStatus {
	pub fn is_pending(&self) -> bool {
		matches!(self, ConfirmationStatus::Pending)
	}

	pub fn label(&self) -> &'static str {
		match self {
			ConfirmationStatus::Pending => "pending",
			ConfirmationStatus::Confirmed(_) => "confirmed",
			ConfirmationStatus::Failed(_) => "failed",
		}
	}
}

/// Errors raised when a handle is used against its status invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleError {
	/// The handle already left the pending state.
	#[error("deployment handle for {tx_hash} is already {status}")]
	AlreadyResolved {
		tx_hash: TxHash,
		status: &'static str,
	},
	/// The address was requested before the handle was confirmed.
	#[error("deployment handle for {tx_hash} is {status}, not confirmed")]
	NotConfirmed {
		tx_hash: TxHash,
		status: &'static str,
	},
}

/// In-flight or completed contract-creation transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentHandle {
	tx_hash: TxHash,
	chain_id: u64,
	sender: Address,
	status: ConfirmationStatus,
}

impl DeploymentHandle {
	/// Creates a pending handle for a freshly submitted transaction.
	pub fn new(tx_hash: TxHash, chain_id: u64, sender: Address) -> Self {
		Self {
			tx_hash,
			chain_id,
			sender,
			status: ConfirmationStatus::Pending,
		}
	}

	pub fn tx_hash(&self) -> TxHash {
		self.tx_hash
	}

	/// Chain the submitting client is connected to.
	pub fn chain_id(&self) -> u64 {
		self.chain_id
	}

	/// Account the submitting client signed with.
	pub fn sender(&self) -> Address {
		self.sender
	}

	pub fn status(&self) -> &ConfirmationStatus {
		&self.status
	}

	/// Applies the outcome of the confirmation wait.
	///
	/// Only a pending handle accepts an outcome; the transition is final.
	pub fn resolve(
		&mut self,
		outcome: Result<DeployedAddress, FailureReason>,
	) -> Result<&ConfirmationStatus, HandleError> {
		if !self.status.is_pending() {
			return Err(HandleError::AlreadyResolved {
				tx_hash: self.tx_hash,
				status: self.status.label(),
			});
		}

		self.status = match outcome {
			Ok(address) => ConfirmationStatus::Confirmed(address),
			Err(reason) => ConfirmationStatus::Failed(reason),
		};
		Ok(&self.status)
	}

	/// Returns the deployed address of a confirmed handle.
	pub fn address(&self) -> Result<DeployedAddress, HandleError> {
		match &self.status {
			ConfirmationStatus::Confirmed(address) => Ok(*address),
			other => Err(HandleError::NotConfirmed {
				tx_hash: self.tx_hash,
				status: other.label(),
			}),
		}
	}
}
