//! Logbook Core - Core library for changelog rendering
//!
//! This crate provides the error types and the configuration system shared
//! by the Logbook crates.

pub mod config;
pub mod error;

pub use error::{ChangelogError, ConfigError, LogbookError, Result};
