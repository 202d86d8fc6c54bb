//! Logging setup for the deployer binary
//!
//! Tracing output is written to stderr so stdout carries only the deployment
//! result that scripts read.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATES: [&str; 6] = [
	"deployer",
	"deployer_cli",
	"deployer_core",
	"deployer_delivery",
	"deployer_artifacts",
	"deployer_config",
];

/// Builds the default filter directive: `level` for the deployer crates, warn for the rest.
pub fn default_directive(level: &str) -> String {
	let mut directive: Vec<String> = CRATES
		.iter()
		.map(|krate| format!("{krate}={level}"))
		.collect();
	directive.push("warn".to_string());
	directive.join(",")
}

/// Initialize structured logging
///
/// `RUST_LOG` takes precedence; otherwise `level` applies to the deployer crates.
pub fn init_logging(level: &str) {
	let env_filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(default_directive(level)))
		.unwrap_or_else(|_| EnvFilter::new(default_directive("info")));

	tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(true)
				.with_thread_ids(false)
				.with_file(false)
				.with_line_number(false)
				.compact(),
		)
		.with(env_filter)
		.init();
}
