//! Artifact listing

use super::{load_config, Outcome};
use crate::cli::commands::ListCommand;
use anyhow::{Context, Result};
use deployer_artifacts::{ArtifactProvider, FileArtifactProvider};
use tracing::info;

/// Lists the deployable contracts in the configured artifacts directory.
pub async fn run(cmd: ListCommand) -> Result<Outcome> {
	let config = load_config(&cmd.source).await?.build()?;
	let provider = FileArtifactProvider::new(&config.artifacts.dir);

	let names = provider
		.list()
		.await
		.with_context(|| format!("failed to read artifacts from {}", provider.root().display()))?;
	info!(artifacts_dir = %provider.root().display(), count = names.len(), "Listed artifacts");

	Ok(Outcome::Listed(names))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cli::commands::SourceArgs;
	use tempfile::TempDir;

	#[tokio::test]
	async fn test_list_reads_configured_artifacts_dir() {
		let dir = TempDir::new().unwrap();
		let artifact = dir.path().join("TransactionStorage.sol/TransactionStorage.json");
		std::fs::create_dir_all(artifact.parent().unwrap()).unwrap();
		std::fs::write(
			&artifact,
			r#"{"contractName":"TransactionStorage","abi":[],"bytecode":"0x6080"}"#,
		)
		.unwrap();

		let cmd = ListCommand {
			source: SourceArgs {
				config: None,
				artifacts: Some(dir.path().display().to_string()),
			},
		};

		let outcome = run(cmd).await.unwrap();
		assert!(matches!(&outcome, Outcome::Listed(names) if names == &["TransactionStorage"]));
	}

	#[tokio::test]
	async fn test_missing_artifacts_dir_lists_nothing() {
		let cmd = ListCommand {
			source: SourceArgs {
				config: None,
				artifacts: Some("/nonexistent/artifacts".into()),
			},
		};

		let outcome = run(cmd).await.unwrap();
		assert_eq!(outcome.exit_code(), 0);
		assert_eq!(outcome.message(), "No deployable contracts found");
	}
}
