//! Command-line interface for course-forge.
//!
//! Provides commands for batch instruction generation, content record
//! validation, and topic routing lookups.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli, Commands};
