use super::SourceArgs;
use clap::Args;

/// List deployable contracts
#[derive(Args, Debug, Clone)]
pub struct ListCommand {
	#[command(flatten)]
	pub source: SourceArgs,
}
