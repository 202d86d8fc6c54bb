//! Confirmation failure reasons.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submitted creation transaction did not reach the confirmed state.
///
/// The display text of every variant starts with a lowercase kind word so that
/// operators (and log filters) can match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureReason {
	/// The transaction was not confirmed before the network client gave up waiting.
	#[error("timeout: transaction not confirmed within {waited_secs}s")]
	Timeout { waited_secs: u64 },
	/// The transaction was included but contract creation reverted.
	#[error("reverted: contract creation transaction reverted")]
	Reverted,
	/// The node no longer knows the transaction; it was dropped or replaced.
	#[error("dropped: transaction was dropped or replaced before inclusion")]
	Dropped,
	/// The transaction was confirmed but its receipt names no created contract.
	#[error("missing_address: receipt does not contain a contract address")]
	MissingAddress,
	/// Communication with the node failed while waiting.
	#[error("network error: {0}")]
	Network(String),
}

impl FailureReason {
	/// Short machine-friendly name of the failure kind.
	pub fn kind(&self) -> &'static str {
		match self {
			FailureReason::Timeout { .. } => "timeout",
			FailureReason::Reverted => "reverted",
			FailureReason::Dropped => "dropped",
			FailureReason::MissingAddress => "missing_address",
			FailureReason::Network(_) => "network",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_starts_with_kind() {
		let reasons = [
			FailureReason::Timeout { waited_secs: 30 },
			FailureReason::Reverted,
			FailureReason::Dropped,
			FailureReason::MissingAddress,
			FailureReason::Network("connection reset".into()),
		];

		for reason in reasons {
			assert!(
				reason.to_string().starts_with(reason.kind()),
				"{reason} should start with {}",
				reason.kind()
			);
		}
	}

	#[test]
	fn test_timeout_mentions_duration() {
		let reason = FailureReason::Timeout { waited_secs: 120 };
		assert_eq!(
			reason.to_string(),
			"timeout: transaction not confirmed within 120s"
		);
	}
}
