//! Command-line front end of the contract deployer.

pub mod cli;
pub mod core;
pub mod operations;

pub use crate::cli::{Cli, Commands};
pub use crate::core::init_logging;
pub use crate::operations::Outcome;
