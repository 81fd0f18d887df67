//! Parsed commands and their source locations.

use std::fmt;

use weird_foundation::{ErrorContext, Kind, Name, Value};

/// Name given to blank and comment lines.
pub const NOOP: &str = "noop";

/// Where a command came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Originating file name, as it was given to the loader.
    pub file: Name,
    /// Line number (1-based).
    pub line: usize,
}

impl Location {
    /// Creates a location.
    #[must_use]
    pub fn new(file: impl Into<Name>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Converts this location into error context.
    #[must_use]
    pub fn context(&self) -> ErrorContext {
        ErrorContext::new(&*self.file, self.line)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One parsed source line.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    /// Operation name (the keyword before `:`).
    pub name: Name,
    /// Decoded arguments, in source order.
    pub args: Vec<Value>,
    /// Source location.
    pub location: Location,
}

impl Command {
    /// Creates a command.
    #[must_use]
    pub fn new(name: impl Into<Name>, args: Vec<Value>, location: Location) -> Self {
        Self {
            name: name.into(),
            args,
            location,
        }
    }

    /// Creates the no-op command used for blank and comment lines.
    #[must_use]
    pub fn noop(location: Location) -> Self {
        Self::new(NOOP, Vec::new(), location)
    }

    /// Returns the kinds of the arguments, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<Kind> {
        self.args.iter().map(Value::kind).collect()
    }
}
