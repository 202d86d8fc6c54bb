//! Builders for constructing configurations.

pub mod config;
