//! Loader, parser, validator, and interpreter for the Weird language.
//!
//! This crate provides:
//! - [`SourceReader`] - Line sources ([`FileSource`], [`MemorySource`])
//! - [`load`] - Import splicing, parsing, and validation into a [`Program`]
//! - [`Op`] - The command dispatch table with argument shapes
//! - [`Memory`] - Scoped variable storage
//! - [`Interpreter`] - The fetch-execute driver with its trap engine
//!
//! # Example
//!
//! ```
//! use weird_language::run_source;
//!
//! let outcome = run_source("label: main\nset: :x, i5\nput: :x\nexit:").unwrap();
//! assert_eq!(outcome.output, vec!["5"]);
//! assert_eq!(outcome.status, 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod interpreter;
pub mod loader;
pub mod memory;
pub mod op;
pub mod output;
pub mod parser;
pub mod program;
pub mod source;
pub mod validator;

pub use command::{Command, Location};
pub use interpreter::{EachLoop, Flow, Interpreter, Limits, Trap, TrapStack};
pub use loader::{load, load_commands, load_lines};
pub use memory::Memory;
pub use op::Op;
pub use output::{OutputSink, StdoutSink};
pub use parser::parse_line;
pub use program::Program;
pub use source::{FileSource, MemorySource, SourceReader};

use weird_foundation::Result;

/// File name given to programs run from a string.
pub const INLINE_FILE: &str = "main";

/// Result of running a program to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Exit status.
    pub status: i32,
    /// Lines written by `put`.
    pub output: Vec<String>,
}

/// Loads and runs `source`, capturing its output.
///
/// # Errors
///
/// Returns any load-time or run-time error.
pub fn run_source(source: &str) -> Result<RunOutcome> {
    let program = Program::from_source(source, INLINE_FILE)?;
    run_program(&program, Limits::unlimited())
}

/// Runs a loaded program, capturing its output.
///
/// # Errors
///
/// Returns the first run-time error.
pub fn run_program(program: &Program, limits: Limits) -> Result<RunOutcome> {
    let mut interp = Interpreter::new(program, Vec::<String>::new()).with_limits(limits);
    let status = interp.run()?;
    Ok(RunOutcome {
        status,
        output: interp.into_output(),
    })
}
