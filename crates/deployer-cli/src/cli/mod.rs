//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure using clap, including the main
//! command parser, subcommand definitions, and output formatting utilities.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Main CLI application structure for the contract deployer
#[derive(Parser, Debug)]
#[command(name = "deployer")]
#[command(about = "Deploy compiled smart contracts and report their addresses")]
#[command(version)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Commands,

	/// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
	#[arg(global = true, long, default_value = "info")]
	pub log_level: String,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Deploy a compiled contract and print its address
	Deploy(commands::DeployCommand),

	/// List deployable contracts found in the artifacts directory
	List(commands::ListCommand),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_deploy_with_overrides() {
		let cli = Cli::try_parse_from([
			"deployer",
			"deploy",
			"TransactionStorage",
			"--rpc-url",
			"http://127.0.0.1:9545",
			"--chain-id",
			"1337",
			"--confirmations",
			"2",
			"--timeout",
			"60",
			"--record",
			"deployments/TransactionStorage.json",
			"--log-level",
			"debug",
		])
		.unwrap();

		assert_eq!(cli.log_level, "debug");
		let Commands::Deploy(cmd) = cli.command else {
			panic!("expected deploy command");
		};
		assert_eq!(cmd.contract, "TransactionStorage");
		assert_eq!(cmd.rpc_url.as_deref(), Some("http://127.0.0.1:9545"));
		assert_eq!(cmd.chain_id, Some(1337));
		assert_eq!(cmd.confirmations, Some(2));
		assert_eq!(cmd.timeout, Some(60));
		assert!(cmd.record.is_some());
	}

	#[test]
	fn test_parse_list() {
		let cli = Cli::try_parse_from(["deployer", "list", "--artifacts", "out"]).unwrap();

		assert_eq!(cli.log_level, "info");
		let Commands::List(cmd) = cli.command else {
			panic!("expected list command");
		};
		assert_eq!(cmd.source.artifacts.as_deref(), Some("out"));
	}

	#[test]
	fn test_deploy_requires_contract() {
		assert!(Cli::try_parse_from(["deployer", "deploy"]).is_err());
	}
}
