//! Contract artifact module for the contract deployer.
//!
//! This module resolves contract names to the compiled artifacts produced by
//! the build toolchain. The deployer never compiles anything itself; it only
//! reads creation bytecode and ABI from whatever the toolchain left on disk
//! (or from artifacts registered in memory).

use async_trait::async_trait;
use deployer_types::ContractArtifact;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod file;
	pub mod memory;
}

pub use implementations::file::FileArtifactProvider;
pub use implementations::memory::InMemoryArtifactProvider;

/// Errors that can occur while resolving a contract artifact.
///
/// Every variant means the requested contract cannot be deployed from the
/// available build output.
#[derive(Debug, Error)]
pub enum ArtifactError {
	/// No artifact with the requested name exists.
	#[error("artifact '{name}' not found in {location}")]
	NotFound { name: String, location: String },
	/// More than one source file defines a contract with the requested name.
	#[error("artifact '{name}' is ambiguous, found in: {}", candidates.join(", "))]
	Ambiguous {
		name: String,
		candidates: Vec<String>,
	},
	/// The artifact has no creation bytecode (interface or abstract contract).
	#[error("artifact '{0}' has no deployable bytecode")]
	NotDeployable(String),
	/// The artifact exists but cannot be parsed.
	#[error("artifact '{name}' is invalid: {reason}")]
	Invalid { name: String, reason: String },
	/// Error that occurs while reading the artifact directory.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Trait defining the interface for artifact sources.
///
/// Implementations map a contract name to its compiled artifact. They are
/// read-only: resolving an artifact never modifies the underlying build output.
#[async_trait]
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ArtifactProvider: Send + Sync {
	/// Resolves a contract name to its compiled artifact.
	async fn resolve(&self, name: &str) -> Result<ContractArtifact, ArtifactError>;

	/// Lists the names of all deployable artifacts, sorted.
	async fn list(&self) -> Result<Vec<String>, ArtifactError>;
}
