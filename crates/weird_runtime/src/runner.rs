//! Loading and running program files.

use std::fmt::Write as _;
use std::path::Path;

use tracing::{debug, info};
use weird_foundation::{Error, Result};
use weird_language::{FileSource, Interpreter, OutputSink, Program, StdoutSink, load};

use crate::config::RunConfig;

/// Loads and validates the program at `path`, splicing its imports.
///
/// # Errors
///
/// Returns the first load error.
pub fn check_file(path: &Path) -> Result<Program> {
    let program = load(&path.to_string_lossy(), &FileSource::new())?;
    debug!(path = %path.display(), commands = program.len(), "loaded program");
    Ok(program)
}

/// Runs `config` with output going to stdout.
///
/// # Errors
///
/// Returns the first load or run-time error.
pub fn run_file(config: &RunConfig) -> Result<i32> {
    run_with(config, StdoutSink)
}

/// Runs `config` with output going to `output`.
///
/// A check-only run stops after loading with status 0.
///
/// # Errors
///
/// Returns the first load or run-time error.
pub fn run_with<O: OutputSink>(config: &RunConfig, output: O) -> Result<i32> {
    let program = check_file(&config.file)?;
    if config.check_only {
        return Ok(0);
    }

    let status = Interpreter::new(&program, output)
        .with_limits(config.limits)
        .run()?;
    info!(path = %config.file.display(), status, "program exited");
    Ok(status)
}

/// Renders an error for the terminal.
///
/// The message is followed by the location on its own line when one is
/// known.
#[must_use]
pub fn render_error(error: &Error) -> String {
    let mut rendered = format!("Error: {error}");
    if let Some(context) = &error.context {
        let _ = write!(rendered, "\n  {context}");
    }
    rendered
}
