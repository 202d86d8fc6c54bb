//! Utility functions for string formatting.

pub mod formatting;

pub use formatting::without_0x_prefix;
