//! In-memory artifact provider.
//!
//! Holds artifacts registered programmatically, e.g. bytecode embedded in a
//! binary or fixtures in tests.

use crate::{ArtifactError, ArtifactProvider};
use async_trait::async_trait;
use deployer_types::ContractArtifact;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifactProvider {
	artifacts: HashMap<String, ContractArtifact>,
}

impl InMemoryArtifactProvider {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers an artifact, replacing any previous one with the same name.
	pub fn with_artifact(mut self, artifact: ContractArtifact) -> Self {
		self.insert(artifact);
		self
	}

	pub fn insert(&mut self, artifact: ContractArtifact) {
		self.artifacts.insert(artifact.name.clone(), artifact);
	}
}

#[async_trait]
impl ArtifactProvider for InMemoryArtifactProvider {
	async fn resolve(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
		let artifact = self
			.artifacts
			.get(name)
			.cloned()
			.ok_or_else(|| ArtifactError::NotFound {
				name: name.to_string(),
				location: "in-memory registry".to_string(),
			})?;

		if !artifact.is_deployable() {
			return Err(ArtifactError::NotDeployable(name.to_string()));
		}
		Ok(artifact)
	}

	async fn list(&self) -> Result<Vec<String>, ArtifactError> {
		let mut names: Vec<String> = self
			.artifacts
			.values()
			.filter(|artifact| artifact.is_deployable())
			.map(|artifact| artifact.name.clone())
			.collect();
		names.sort();
		Ok(names)
	}
}
