//! Persistent summary of a successful deployment.

use chrono::{DateTime, Utc};
use deployer_types::{Address, ContractArtifact, DeployedAddress, DeploymentHandle, TxHash};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Record of a confirmed deployment.
///
/// Written as JSON so later scripts can look up the address and ABI instead of
/// hard-coding them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
	pub contract: String,
	pub address: DeployedAddress,
	pub transaction_hash: TxHash,
	pub chain_id: u64,
	pub deployer: Address,
	pub deployed_at: DateTime<Utc>,
	pub abi: serde_json::Value,
}

impl DeploymentRecord {
	pub(crate) fn new(
		artifact: &ContractArtifact,
		handle: &DeploymentHandle,
		address: DeployedAddress,
	) -> Self {
		Self {
			contract: artifact.name.clone(),
			address,
			transaction_hash: handle.tx_hash(),
			chain_id: handle.chain_id(),
			deployer: handle.sender(),
			deployed_at: Utc::now(),
			abi: artifact.abi.clone(),
		}
	}

	/// Writes the record as pretty-printed JSON, creating parent directories.
	pub async fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
		let path = path.as_ref();
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(parent).await?;
		}

		let json = serde_json::to_vec_pretty(self)?;
		tokio::fs::write(path, json).await?;

		debug!(path = %path.display(), contract = %self.contract, "Deployment record written");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use deployer_types::Bytes;
	use tempfile::TempDir;

	fn create_test_record() -> DeploymentRecord {
		let artifact = ContractArtifact::new(
			"TransactionStorage",
			serde_json::json!([{"type": "function", "name": "store"}]),
			Bytes::from_static(&[0x60, 0x80]),
		);
		let handle = DeploymentHandle::new(
			TxHash::repeat_byte(0x11),
			31337,
			Address::repeat_byte(0xaa),
		);
		DeploymentRecord::new(&artifact, &handle, DeployedAddress::new(Address::repeat_byte(0x42)))
	}

	#[test]
	fn test_record_fields_come_from_artifact_and_handle() {
		let record = create_test_record();
		assert_eq!(record.contract, "TransactionStorage");
		assert_eq!(record.transaction_hash, TxHash::repeat_byte(0x11));
		assert_eq!(record.chain_id, 31337);
		assert_eq!(record.deployer, Address::repeat_byte(0xaa));
		assert_eq!(record.abi[0]["name"], "store");
	}

	#[tokio::test]
	async fn test_write_to_creates_directories() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("deployments/localhost/TransactionStorage.json");
		let record = create_test_record();

		record.write_to(&path).await.unwrap();

		let content = tokio::fs::read_to_string(&path).await.unwrap();
		let json: serde_json::Value = serde_json::from_str(&content).unwrap();
		assert_eq!(json["contract"], "TransactionStorage");
		assert_eq!(json["chainId"], 31337);
		assert!(json["address"]
			.as_str()
			.unwrap()
			.eq_ignore_ascii_case("0x4242424242424242424242424242424242424242"));

		let parsed: DeploymentRecord = serde_json::from_str(&content).unwrap();
		assert_eq!(parsed, record);
	}
}
