//! Common types module for the contract deployer.
//!
//! This module defines the data model shared by every deployer crate: the
//! compiled contract artifact that is read from the build output, the handle
//! that tracks an in-flight creation transaction, and the address that a
//! confirmed deployment resolves to.

/// Compiled contract artifacts (bytecode plus interface descriptor).
pub mod artifact;
/// Deployment handles, confirmation status and deployed addresses.
pub mod deployment;
/// Reasons a submitted creation transaction can fail to confirm.
pub mod failure;
/// Utility functions for hex string handling.
pub mod utils;

pub use alloy_primitives::{Address, Bytes, TxHash};
pub use artifact::ContractArtifact;
pub use deployment::{ConfirmationStatus, DeployedAddress, DeploymentHandle, HandleError};
pub use failure::FailureReason;
pub use utils::without_0x_prefix;
