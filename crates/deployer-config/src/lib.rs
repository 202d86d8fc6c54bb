//! Configuration module for the contract deployer.
//!
//! This module provides structures and utilities for managing deployer
//! configuration. It supports loading configuration from TOML files with
//! `${VAR}` / `${VAR:-default}` environment variable references and validates
//! every value before a network client is built from it.
//!
//! Every section is optional. A missing file section falls back to a local
//! Hardhat node setup (see [`Config::default_local`]).

pub mod builders;

pub use builders::config::ConfigBuilder;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Chain id of a local Hardhat / Anvil node.
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// Well-known private key of the first Hardhat / Anvil development account.
pub const DEV_PRIVATE_KEY: &str =
	"0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the deployer.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
	/// Node connection and confirmation policy.
	#[serde(default)]
	pub network: NetworkConfig,
	/// Signing account.
	#[serde(default)]
	pub account: AccountConfig,
	/// Location of compiled contract artifacts.
	#[serde(default)]
	pub artifacts: ArtifactsConfig,
}

/// Node connection and confirmation policy.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NetworkConfig {
	/// HTTP JSON-RPC endpoint.
	#[serde(default = "default_rpc_url")]
	pub rpc_url: String,
	/// Expected chain id, checked against the node on connect.
	/// Unchecked when unset, except for the default local endpoint.
	#[serde(default)]
	pub chain_id: Option<u64>,
	/// Number of confirmations required before an address is reported.
	/// Defaults to 1 confirmation if not specified.
	#[serde(default = "default_confirmations")]
	pub confirmations: u64,
	/// Maximum time to wait for confirmation. Waits indefinitely when unset.
	#[serde(default)]
	pub timeout_seconds: Option<u64>,
	/// Interval between node polls while waiting for confirmation.
	#[serde(default = "default_poll_interval_ms")]
	pub poll_interval_ms: u64,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			rpc_url: default_rpc_url(),
			chain_id: None,
			confirmations: default_confirmations(),
			timeout_seconds: None,
			poll_interval_ms: default_poll_interval_ms(),
		}
	}
}

impl NetworkConfig {
	/// Chain id the node must report: the configured one, or the local
	/// development chain when the endpoint is the default local node.
	pub fn expected_chain_id(&self) -> Option<u64> {
		self.chain_id
			.or_else(|| (self.rpc_url == default_rpc_url()).then_some(LOCAL_CHAIN_ID))
	}

	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_seconds.map(Duration::from_secs)
	}

	pub fn poll_interval(&self) -> Duration {
		Duration::from_millis(self.poll_interval_ms)
	}
}

/// Signing account configuration.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AccountConfig {
	/// Hex-encoded private key, with or without 0x prefix.
	#[serde(default = "default_private_key")]
	pub private_key: String,
}

impl Default for AccountConfig {
	fn default() -> Self {
		Self {
			private_key: default_private_key(),
		}
	}
}

// Keys never end up in logs.
impl fmt::Debug for AccountConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AccountConfig")
			.field("private_key", &"<redacted>")
			.finish()
	}
}

/// Location of compiled contract artifacts.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ArtifactsConfig {
	/// Root directory of the build output (Hardhat `artifacts/` or Foundry `out/`).
	#[serde(default = "default_artifacts_dir")]
	pub dir: String,
}

impl Default for ArtifactsConfig {
	fn default() -> Self {
		Self {
			dir: default_artifacts_dir(),
		}
	}
}

impl fmt::Debug for Config {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Config")
			.field("network", &self.network)
			.field("account", &self.account)
			.field("artifacts", &self.artifacts)
			.finish()
	}
}

fn default_rpc_url() -> String {
	"http://127.0.0.1:8545".to_string()
}

fn default_confirmations() -> u64 {
	1
}

fn default_poll_interval_ms() -> u64 {
	1000
}

fn default_private_key() -> String {
	DEV_PRIVATE_KEY.to_string()
}

fn default_artifacts_dir() -> String {
	"artifacts".to_string()
}

/// Resolves environment variables in a string.
///
/// Replaces ${VAR_NAME} with the value of the environment variable VAR_NAME.
/// Supports default values with ${VAR_NAME:-default_value}.
///
/// Input strings are limited to 1MB to prevent ReDoS attacks.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {e}")))?;

	let mut result = String::with_capacity(input.len());
	let mut last_end = 0;

	for cap in re.captures_iter(input) {
		let (Some(full_match), Some(var_name)) = (cap.get(0), cap.get(1)) else {
			continue;
		};
		let var_name = var_name.as_str();
		let default_value = cap.get(2).map(|m| m.as_str());

		let value = match std::env::var(var_name) {
			Ok(v) => v,
			Err(_) => match default_value {
				Some(default) => default.to_string(),
				None => {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{var_name}' not found"
					)));
				},
			},
		};

		result.push_str(&input[last_end..full_match.start()]);
		result.push_str(&value);
		last_end = full_match.end();
	}
	result.push_str(&input[last_end..]);

	Ok(result)
}

impl Config {
	/// Configuration for a local Hardhat node with its first development account.
	pub fn default_local() -> Self {
		Self::default()
	}

	/// Loads configuration from a file, resolving environment variables.
	///
	/// Environment variables from a `.env` file must already be loaded into
	/// the process environment by the caller.
	pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		debug!(path = %path.display(), "Loading configuration");

		let content = tokio::fs::read_to_string(path).await?;
		content.parse()
	}

	/// Validates the configuration to ensure all values are usable.
	///
	/// - RPC URL uses http or https
	/// - At least one confirmation is required
	/// - Timeout and poll interval are non-zero
	/// - Private key is 32 bytes of hex
	/// - Artifacts directory is set
	pub fn validate(&self) -> Result<(), ConfigError> {
		let network = &self.network;
		if !(network.rpc_url.starts_with("http://") || network.rpc_url.starts_with("https://")) {
			return Err(ConfigError::Validation(format!(
				"RPC URL must start with http:// or https://, got '{}'",
				network.rpc_url
			)));
		}
		if network.confirmations == 0 {
			return Err(ConfigError::Validation(
				"confirmations must be at least 1".into(),
			));
		}
		if network.timeout_seconds == Some(0) {
			return Err(ConfigError::Validation(
				"timeout_seconds must be greater than 0 when set".into(),
			));
		}
		if network.poll_interval_ms == 0 {
			return Err(ConfigError::Validation(
				"poll_interval_ms must be greater than 0".into(),
			));
		}

		validate_private_key(&self.account.private_key)?;

		if self.artifacts.dir.trim().is_empty() {
			return Err(ConfigError::Validation(
				"artifacts directory cannot be empty".into(),
			));
		}

		Ok(())
	}
}

fn validate_private_key(key: &str) -> Result<(), ConfigError> {
	let key = key.trim();
	let hex = key.strip_prefix("0x").unwrap_or(key);
	if hex.len() != 64 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err(ConfigError::Validation(
			"private key must be 64 hex characters (optionally 0x-prefixed)".into(),
		));
	}
	Ok(())
}

/// Implementation of FromStr trait for Config to enable parsing from string.
///
/// Environment variables are resolved and the configuration is validated
/// after parsing.
impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}
