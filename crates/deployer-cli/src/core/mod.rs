//! Process-level setup shared by the deployer commands

pub mod logging;

pub use logging::init_logging;
