//! Configuration builder for applying command-line overrides.
//!
//! Starts from a loaded (or default) configuration, replaces individual values
//! and validates the result once at the end.

use crate::{Config, ConfigError};

/// Builder for creating `Config` instances with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
	config: Config,
}

impl From<Config> for ConfigBuilder {
	fn from(config: Config) -> Self {
		Self { config }
	}
}

impl ConfigBuilder {
	/// Creates a new `ConfigBuilder` targeting a local Hardhat node.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
		self.config.network.rpc_url = rpc_url.into();
		self
	}

	pub fn chain_id(mut self, chain_id: u64) -> Self {
		self.config.network.chain_id = Some(chain_id);
		self
	}

	pub fn confirmations(mut self, confirmations: u64) -> Self {
		self.config.network.confirmations = confirmations;
		self
	}

	/// Sets the confirmation timeout in seconds.
	pub fn timeout_seconds(mut self, timeout: u64) -> Self {
		self.config.network.timeout_seconds = Some(timeout);
		self
	}

	pub fn private_key(mut self, private_key: impl Into<String>) -> Self {
		self.config.account.private_key = private_key.into();
		self
	}

	pub fn artifacts_dir(mut self, dir: impl Into<String>) -> Self {
		self.config.artifacts.dir = dir.into();
		self
	}

	/// Applies an override only when a value is present.
	pub fn maybe<T>(self, value: Option<T>, apply: impl FnOnce(Self, T) -> Self) -> Self {
		match value {
			Some(value) => apply(self, value),
			None => self,
		}
	}

	/// Builds and validates the final configuration.
	pub fn build(self) -> Result<Config, ConfigError> {
		self.config.validate()?;
		Ok(self.config)
	}
}
