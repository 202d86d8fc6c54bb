//! Command implementations and their outcomes
//!
//! Each command produces an [`Outcome`]; the binary reports it and turns it
//! into the process exit status. That mapping happens nowhere else.

pub mod deploy;
pub mod list;

use crate::cli::{commands::SourceArgs, output::Display};
use anyhow::{Context, Result};
use deployer_config::{Config, ConfigBuilder};
use deployer_core::{DeploymentError, DeploymentRecord};
use deployer_delivery::NetworkSettings;

/// Exit status for an interrupted wait (128 + SIGINT).
pub const EXIT_INTERRUPTED: u8 = 130;

/// Result of a command, ready to be reported to the operator.
#[derive(Debug)]
pub enum Outcome {
	/// The contract was confirmed on chain.
	Deployed(DeploymentRecord),
	/// The deployment failed before or after submission.
	Failed(DeploymentError),
	/// The operator interrupted the command while it was running.
	Interrupted { contract: String },
	/// Deployable artifact names.
	Listed(Vec<String>),
}

impl Outcome {
	pub fn exit_code(&self) -> u8 {
		match self {
			Outcome::Deployed(_) | Outcome::Listed(_) => 0,
			Outcome::Failed(_) => 1,
			Outcome::Interrupted { .. } => EXIT_INTERRUPTED,
		}
	}

	/// Primary line shown to the operator.
	pub fn message(&self) -> String {
		match self {
			Outcome::Deployed(record) => format!("Contract deployed to: {}", record.address),
			Outcome::Failed(err) => format!("Deployment failed [{}]: {}", err.kind(), err),
			Outcome::Interrupted { contract } => format!(
				"Interrupted while deploying {contract}; deployment status unknown, \
				 the transaction may still be mined"
			),
			Outcome::Listed(names) => match names.len() {
				0 => "No deployable contracts found".to_string(),
				n => format!("{n} deployable contract(s)"),
			},
		}
	}

	/// Prints the outcome; successes to stdout, failures to stderr.
	pub fn report(&self) {
		match self {
			Outcome::Deployed(record) => {
				Display::success(&self.message());
				Display::kv("Contract", &record.contract);
				Display::kv("Transaction", &record.transaction_hash.to_string());
				Display::kv("Chain ID", &record.chain_id.to_string());
				Display::kv("Deployer", &record.deployer.to_string());
			},
			Outcome::Failed(_) | Outcome::Interrupted { .. } => Display::error(&self.message()),
			Outcome::Listed(names) if names.is_empty() => Display::warning(&self.message()),
			Outcome::Listed(names) => {
				Display::section(&self.message());
				for name in names {
					Display::item(name);
				}
			},
		}
	}
}

/// Loads the configuration file (or local defaults) and applies the artifacts override.
pub(crate) async fn load_config(source: &SourceArgs) -> Result<ConfigBuilder> {
	let config = match &source.config {
		Some(path) => Config::from_file(path)
			.await
			.with_context(|| format!("failed to load config from {}", path.display()))?,
		None => Config::default_local(),
	};

	Ok(ConfigBuilder::from(config).maybe(source.artifacts.clone(), ConfigBuilder::artifacts_dir))
}

/// Network client settings derived from the validated configuration.
pub(crate) fn network_settings(config: &Config) -> NetworkSettings {
	NetworkSettings {
		rpc_url: config.network.rpc_url.clone(),
		chain_id: config.network.expected_chain_id(),
		confirmations: config.network.confirmations,
		timeout: config.network.timeout(),
		poll_interval: config.network.poll_interval(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use deployer_delivery::SubmissionError;
	use std::time::Duration;

	#[test]
	fn test_exit_codes() {
		let failed = Outcome::Failed(DeploymentError::Submission(SubmissionError::EmptyBytecode));
		assert_eq!(failed.exit_code(), 1);
		assert!(failed.message().starts_with("Deployment failed [submission]"));

		let interrupted = Outcome::Interrupted {
			contract: "TransactionStorage".into(),
		};
		assert_eq!(interrupted.exit_code(), 130);
		assert!(interrupted.message().contains("status unknown"));

		assert_eq!(Outcome::Listed(vec![]).exit_code(), 0);
	}

	#[test]
	fn test_network_settings_from_config() {
		let config = ConfigBuilder::new()
			.rpc_url("http://127.0.0.1:9545")
			.timeout_seconds(45)
			.build()
			.unwrap();

		let settings = network_settings(&config);
		assert_eq!(settings.rpc_url, "http://127.0.0.1:9545");
		assert_eq!(settings.chain_id, None);
		assert_eq!(settings.confirmations, 1);
		assert_eq!(settings.timeout, Some(Duration::from_secs(45)));
	}

	#[test]
	fn test_network_settings_check_local_chain_by_default() {
		let settings = network_settings(&Config::default_local());
		assert_eq!(settings.chain_id, Some(31337));

		let config = ConfigBuilder::new()
			.rpc_url("https://rpc.sepolia.org")
			.build()
			.unwrap();
		assert_eq!(network_settings(&config).chain_id, None);
	}

	#[tokio::test]
	async fn test_load_config_without_file_uses_local_defaults() {
		let source = SourceArgs {
			config: None,
			artifacts: Some("out".into()),
		};

		let config = load_config(&source).await.unwrap().build().unwrap();
		assert_eq!(config.network.rpc_url, "http://127.0.0.1:8545");
		assert_eq!(config.artifacts.dir, "out");
	}

	#[tokio::test]
	async fn test_load_config_reports_missing_file() {
		let source = SourceArgs {
			config: Some("/nonexistent/deployer.toml".into()),
			artifacts: None,
		};

		let err = load_config(&source).await.unwrap_err();
		assert!(err.to_string().contains("/nonexistent/deployer.toml"));
	}
}
