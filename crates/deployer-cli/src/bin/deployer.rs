//! Main binary entry point for the contract deployer
//!
//! Parses arguments, sets up logging, runs the selected command and maps its
//! outcome to the process exit status.

use clap::Parser;
use deployer_cli::{
	cli::output::Display,
	init_logging,
	operations::{deploy, list},
	Cli, Commands,
};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
	// Load environment variables from .env file if it exists
	let _ = dotenvy::dotenv();

	let cli = Cli::parse();
	init_logging(&cli.log_level);

	let result = match cli.command {
		Commands::Deploy(cmd) => deploy::run(cmd).await,
		Commands::List(cmd) => list::run(cmd).await,
	};

	match result {
		Ok(outcome) => {
			outcome.report();
			ExitCode::from(outcome.exit_code())
		},
		Err(e) => {
			error!(error = %e, "Command failed");
			Display::error(&format!("{:#}", e));
			ExitCode::FAILURE
		},
	}
}
