//! CLI command definitions and argument parsing

mod deploy;
mod list;

pub use deploy::DeployCommand;
pub use list::ListCommand;

use clap::Args;
use std::path::PathBuf;

/// Arguments locating the configuration and the compiled artifacts.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
	/// Configuration file (defaults to a local Hardhat node when omitted)
	#[arg(long, env = "DEPLOYER_CONFIG")]
	pub config: Option<PathBuf>,

	/// Directory containing compiled contract artifacts
	#[arg(long)]
	pub artifacts: Option<String>,
}
