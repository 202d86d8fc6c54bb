//! File-backed artifact provider.
//!
//! Reads compilation artifacts from a build output directory. Both Hardhat
//! (`artifacts/contracts/Foo.sol/Foo.json`, `bytecode` as a hex string) and
//! Foundry (`out/Foo.sol/Foo.json`, `bytecode.object`) layouts are supported.
//! The directory is searched recursively, so contracts living in nested source
//! folders resolve by bare name.

use crate::{ArtifactError, ArtifactProvider};
use alloy_primitives::{hex, Bytes};
use async_trait::async_trait;
use deployer_types::{without_0x_prefix, ContractArtifact};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directories that hold compiler bookkeeping rather than contract artifacts.
const SKIPPED_DIRS: &[&str] = &["build-info", "cache"];

/// Artifact provider reading Hardhat or Foundry JSON artifacts from disk.
#[derive(Debug, Clone)]
pub struct FileArtifactProvider {
	root: PathBuf,
}

impl FileArtifactProvider {
	/// Creates a provider rooted at the toolchain's artifact directory.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Collects every candidate artifact file below the root.
	fn artifact_files(&self) -> Result<Vec<PathBuf>, ArtifactError> {
		let mut files = Vec::new();
		if self.root.is_dir() {
			collect_json_files(&self.root, &mut files)?;
		}
		files.sort();
		Ok(files)
	}

	/// Finds the single artifact file for `name`.
	fn locate(&self, name: &str) -> Result<PathBuf, ArtifactError> {
		let mut candidates: Vec<PathBuf> = self
			.artifact_files()?
			.into_iter()
			.filter(|path| path.file_stem().and_then(|s| s.to_str()) == Some(name))
			.collect();

		match candidates.len() {
			0 => Err(ArtifactError::NotFound {
				name: name.to_string(),
				location: self.root.display().to_string(),
			}),
			1 => Ok(candidates.remove(0)),
			_ => Err(ArtifactError::Ambiguous {
				name: name.to_string(),
				candidates: candidates
					.iter()
					.map(|path| path.display().to_string())
					.collect(),
			}),
		}
	}

	async fn read_artifact(&self, name: &str, path: &Path) -> Result<ContractArtifact, ArtifactError> {
		let contents = tokio::fs::read_to_string(path).await?;
		let json: Value = serde_json::from_str(&contents).map_err(|e| ArtifactError::Invalid {
			name: name.to_string(),
			reason: format!("invalid JSON in {}: {}", path.display(), e),
		})?;
		parse_artifact(name, &json)
	}
}

#[async_trait]
impl ArtifactProvider for FileArtifactProvider {
	async fn resolve(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
		let path = self.locate(name)?;
		debug!(contract = name, path = %path.display(), "Loading contract artifact");

		let artifact = self.read_artifact(name, &path).await?;
		debug!(
			contract = name,
			bytecode_len = artifact.bytecode.len(),
			"Loaded contract artifact"
		);
		Ok(artifact)
	}

	async fn list(&self) -> Result<Vec<String>, ArtifactError> {
		let mut names = Vec::new();

		for path in self.artifact_files()? {
			let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
				continue;
			};

			match self.read_artifact(name, &path).await {
				Ok(artifact) => names.push(artifact.name),
				Err(e) => debug!(path = %path.display(), "Skipping {}", e),
			}
		}

		names.sort();
		names.dedup();
		Ok(names)
	}
}

fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ArtifactError> {
	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();
		let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();

		// Symlinked directories are not followed.
		if entry.file_type()?.is_dir() {
			if !SKIPPED_DIRS.contains(&file_name) {
				collect_json_files(&path, files)?;
			}
		} else if file_name.ends_with(".json") && !file_name.ends_with(".dbg.json") {
			files.push(path);
		}
	}
	Ok(())
}

/// Extracts bytecode and ABI from a Hardhat or Foundry artifact document.
fn parse_artifact(name: &str, json: &Value) -> Result<ContractArtifact, ArtifactError> {
	let invalid = |reason: &str| ArtifactError::Invalid {
		name: name.to_string(),
		reason: reason.to_string(),
	};

	let abi = json
		.get("abi")
		.filter(|abi| abi.is_array())
		.cloned()
		.ok_or_else(|| invalid("missing abi array"))?;

	let bytecode = match json.get("bytecode") {
		// Hardhat
		Some(Value::String(code)) => code.as_str(),
		// Foundry
		Some(Value::Object(obj)) => obj
			.get("object")
			.and_then(Value::as_str)
			.ok_or_else(|| invalid("missing bytecode.object"))?,
		_ => return Err(invalid("missing bytecode")),
	};

	let code = without_0x_prefix(bytecode);
	if code.is_empty() {
		return Err(ArtifactError::NotDeployable(name.to_string()));
	}
	if code.contains("__") {
		return Err(invalid("bytecode contains unlinked library placeholders"));
	}

	let bytes = hex::decode(code).map_err(|e| invalid(&format!("invalid bytecode hex: {}", e)))?;

	let mut artifact = ContractArtifact::new(name, abi, Bytes::from(bytes));
	let source_name = json
		.get("sourceName")
		.and_then(Value::as_str)
		.or_else(|| json.pointer("/ast/absolutePath").and_then(Value::as_str));
	if let Some(source) = source_name {
		artifact = artifact.with_source_name(source);
	}

	Ok(artifact)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use tempfile::TempDir;

	fn write_json(root: &Path, relative: &str, value: &Value) {
		let path = root.join(relative);
		std::fs::create_dir_all(path.parent().unwrap()).unwrap();
		std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
	}

	fn hardhat_artifact(name: &str, bytecode: &str) -> Value {
		json!({
			"_format": "hh-sol-artifact-1",
			"contractName": name,
			"sourceName": format!("contracts/{}.sol", name),
			"abi": [{"type": "constructor", "inputs": [], "stateMutability": "nonpayable"}],
			"bytecode": bytecode,
			"deployedBytecode": bytecode,
			"linkReferences": {},
			"deployedLinkReferences": {}
		})
	}

	fn foundry_artifact(bytecode: &str) -> Value {
		json!({
			"abi": [],
			"bytecode": {"object": bytecode, "sourceMap": "", "linkReferences": {}},
			"deployedBytecode": {"object": bytecode},
			"ast": {"absolutePath": "src/Counter.sol"}
		})
	}

	#[tokio::test]
	async fn test_resolve_hardhat_layout() {
		let dir = TempDir::new().unwrap();
		write_json(
			dir.path(),
			"contracts/TransactionStorage.sol/TransactionStorage.json",
			&hardhat_artifact("TransactionStorage", "0x6080604052"),
		);
		write_json(
			dir.path(),
			"contracts/TransactionStorage.sol/TransactionStorage.dbg.json",
			&json!({"_format": "hh-sol-dbg-1", "buildInfo": "../../build-info/abc.json"}),
		);

		let provider = FileArtifactProvider::new(dir.path());
		let artifact = provider.resolve("TransactionStorage").await.unwrap();

		assert_eq!(artifact.name, "TransactionStorage");
		assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
		assert_eq!(
			artifact.source_name.as_deref(),
			Some("contracts/TransactionStorage.sol")
		);
		assert!(artifact.abi.is_array());
	}

	#[tokio::test]
	async fn test_resolve_foundry_layout() {
		let dir = TempDir::new().unwrap();
		write_json(dir.path(), "Counter.sol/Counter.json", &foundry_artifact("0x6001"));

		let provider = FileArtifactProvider::new(dir.path());
		let artifact = provider.resolve("Counter").await.unwrap();

		assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x01]);
		assert_eq!(artifact.source_name.as_deref(), Some("src/Counter.sol"));
	}

	#[tokio::test]
	async fn test_unknown_contract_is_not_found() {
		let dir = TempDir::new().unwrap();
		write_json(
			dir.path(),
			"contracts/Other.sol/Other.json",
			&hardhat_artifact("Other", "0x6001"),
		);

		let provider = FileArtifactProvider::new(dir.path());
		let err = provider.resolve("TransactionStorage").await.unwrap_err();

		assert!(matches!(err, ArtifactError::NotFound { ref name, .. } if name == "TransactionStorage"));
	}

	#[tokio::test]
	async fn test_missing_root_is_not_found() {
		let provider = FileArtifactProvider::new("/nonexistent/artifacts");
		let err = provider.resolve("TransactionStorage").await.unwrap_err();
		assert!(matches!(
			err,
			ArtifactError::NotFound { ref location, .. } if location == "/nonexistent/artifacts"
		));
		assert!(provider.list().await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_interface_is_not_deployable() {
		let dir = TempDir::new().unwrap();
		write_json(
			dir.path(),
			"contracts/IStorage.sol/IStorage.json",
			&hardhat_artifact("IStorage", "0x"),
		);

		let provider = FileArtifactProvider::new(dir.path());
		let err = provider.resolve("IStorage").await.unwrap_err();
		assert!(matches!(err, ArtifactError::NotDeployable(ref name) if name == "IStorage"));
	}

	#[tokio::test]
	async fn test_unlinked_library_is_invalid() {
		let dir = TempDir::new().unwrap();
		write_json(
			dir.path(),
			"contracts/Linked.sol/Linked.json",
			&hardhat_artifact("Linked", "0x6080__$a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5$__6040"),
		);

		let provider = FileArtifactProvider::new(dir.path());
		let err = provider.resolve("Linked").await.unwrap_err();
		assert!(err.to_string().contains("unlinked library"));
	}

	#[tokio::test]
	async fn test_malformed_json_is_invalid() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("contracts/Broken.sol");
		std::fs::create_dir_all(&path).unwrap();
		std::fs::write(path.join("Broken.json"), "{ not json").unwrap();

		let provider = FileArtifactProvider::new(dir.path());
		let err = provider.resolve("Broken").await.unwrap_err();
		assert!(matches!(err, ArtifactError::Invalid { .. }));
	}

	#[tokio::test]
	async fn test_duplicate_names_are_ambiguous() {
		let dir = TempDir::new().unwrap();
		write_json(
			dir.path(),
			"contracts/a/Token.sol/Token.json",
			&hardhat_artifact("Token", "0x6001"),
		);
		write_json(
			dir.path(),
			"contracts/b/Token.sol/Token.json",
			&hardhat_artifact("Token", "0x6002"),
		);

		let provider = FileArtifactProvider::new(dir.path());
		let err = provider.resolve("Token").await.unwrap_err();
		match err {
			ArtifactError::Ambiguous { candidates, .. } => assert_eq!(candidates.len(), 2),
			other => panic!("expected ambiguity, got {other}"),
		}
	}

	#[tokio::test]
	async fn test_list_skips_non_deployable_and_build_info() {
		let dir = TempDir::new().unwrap();
		write_json(
			dir.path(),
			"contracts/TransactionStorage.sol/TransactionStorage.json",
			&hardhat_artifact("TransactionStorage", "0x6080"),
		);
		write_json(
			dir.path(),
			"contracts/IStorage.sol/IStorage.json",
			&hardhat_artifact("IStorage", "0x"),
		);
		write_json(dir.path(), "Counter.sol/Counter.json", &foundry_artifact("0x6001"));
		write_json(
			dir.path(),
			"build-info/5d1f.json",
			&json!({"id": "5d1f", "input": {}, "output": {}}),
		);

		let provider = FileArtifactProvider::new(dir.path());
		let names = provider.list().await.unwrap();

		assert_eq!(names, vec!["Counter".to_string(), "TransactionStorage".to_string()]);
	}

	#[cfg(unix)]
	#[tokio::test]
	async fn test_symlink_cycle_is_not_followed() {
		let dir = TempDir::new().unwrap();
		write_json(
			dir.path(),
			"contracts/TransactionStorage.sol/TransactionStorage.json",
			&hardhat_artifact("TransactionStorage", "0x6080"),
		);
		std::os::unix::fs::symlink(dir.path(), dir.path().join("contracts/loop")).unwrap();

		let provider = FileArtifactProvider::new(dir.path());
		assert_eq!(provider.root(), dir.path());
		assert_eq!(provider.list().await.unwrap(), vec!["TransactionStorage".to_string()]);
		assert!(provider.resolve("TransactionStorage").await.is_ok());
	}
}
