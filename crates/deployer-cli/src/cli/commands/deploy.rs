//! Deploy command arguments

use super::SourceArgs;
use clap::Args;
use std::path::PathBuf;

/// Deploy a single contract by artifact name
#[derive(Args, Debug, Clone)]
pub struct DeployCommand {
	/// Contract name as it appears in the build artifacts (e.g., TransactionStorage)
	pub contract: String,

	#[command(flatten)]
	pub source: SourceArgs,

	/// JSON-RPC endpoint of the target node
	#[arg(long, env = "DEPLOYER_RPC_URL")]
	pub rpc_url: Option<String>,

	/// Expected chain id of the target node
	#[arg(long)]
	pub chain_id: Option<u64>,

	/// Confirmations to wait for before reporting the address
	#[arg(long)]
	pub confirmations: Option<u64>,

	/// Seconds to wait for confirmation before giving up
	#[arg(long)]
	pub timeout: Option<u64>,

	/// Write a JSON deployment record to this file
	#[arg(long)]
	pub record: Option<PathBuf>,

	/// Signing key; read from the environment only
	#[arg(long, env = "DEPLOYER_PRIVATE_KEY", hide = true, hide_env_values = true)]
	pub private_key: Option<String>,
}
