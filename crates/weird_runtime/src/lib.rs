//! CLI, run configuration, and logging setup for the Weird interpreter.
//!
//! This crate provides:
//! - [`CliConfig`] - Command-line parsing for the `weird` binary
//! - [`RunConfig`] - What to load and how to run it
//! - [`run_file`] / [`check_file`] - Loading and running programs from disk
//! - [`init_tracing`] - Log subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod logging;
pub mod runner;

pub use config::{CliConfig, CliError, DEFAULT_FILE, RunConfig};
pub use logging::init_tracing;
pub use runner::{check_file, render_error, run_file, run_with};
