//! Compiled contract artifact types.
//!
//! An artifact is the build toolchain's output for a single contract: the
//! creation bytecode that gets submitted to the network and the ABI that
//! describes its interface. Artifacts are read-only from the deployer's point
//! of view.

use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

/// Compiled, deployable representation of a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractArtifact {
	/// Contract name, e.g. `TransactionStorage`.
	pub name: String,
	/// Source file the contract was compiled from, when the toolchain records it.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub source_name: Option<String>,
	/// JSON interface descriptor.
	pub abi: serde_json::Value,
	/// Creation bytecode.
	pub bytecode: Bytes,
}

impl ContractArtifact {
	/// Creates an artifact with no recorded source file.
	pub fn new(name: impl Into<String>, abi: serde_json::Value, bytecode: Bytes) -> Self {
		Self {
			name: name.into(),
			source_name: None,
			abi,
			bytecode,
		}
	}

	/// Records the source file the contract was compiled from.
	pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
		self.source_name = Some(source_name.into());
		self
	}

	/// Interfaces and abstract contracts compile to empty bytecode and cannot be deployed.
	pub fn is_deployable(&self) -> bool {
		!self.bytecode.is_empty()
	}

	/// Fully qualified name in `source:Contract` form, falling back to the bare name.
	pub fn qualified_name(&self) -> String {
		match &self.source_name {
			Some(source) => format!("{}:{}", source, self.name),
			None => self.name.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_deployable_requires_bytecode() {
		let empty = ContractArtifact::new("IStorage", serde_json::json!([]), Bytes::new());
		assert!(!empty.is_deployable());

		let concrete = ContractArtifact::new(
			"TransactionStorage",
			serde_json::json!([]),
			Bytes::from(vec![0x60, 0x80, 0x60, 0x40]),
		);
		assert!(concrete.is_deployable());
	}

	#[test]
	fn test_qualified_name() {
		let artifact = ContractArtifact::new("TransactionStorage", serde_json::json!([]), Bytes::new());
		assert_eq!(artifact.qualified_name(), "TransactionStorage");

		let artifact = artifact.with_source_name("contracts/TransactionStorage.sol");
		assert_eq!(
			artifact.qualified_name(),
			"contracts/TransactionStorage.sol:TransactionStorage"
		);
	}
}
