//! Validated, runnable programs.

use std::collections::HashMap;

use weird_foundation::{Name, Result};

use crate::command::Command;
use crate::loader::load;
use crate::op::Op;
use crate::source::MemorySource;
use crate::validator::{label_index, validate};

/// Name of the entry label.
pub const ENTRY_LABEL: &str = "main";

/// A command sequence that passed validation, with its label index.
///
/// Only a `Program` can be handed to the interpreter, so every command it
/// executes is known to have a well-formed argument list.
#[derive(Debug, Clone)]
pub struct Program {
    commands: Vec<Command>,
    ops: Vec<Op>,
    labels: HashMap<Name, usize>,
}

impl Program {
    /// Validates `commands` and builds the label index.
    ///
    /// # Errors
    ///
    /// Returns the first validation error.
    pub fn new(commands: Vec<Command>) -> Result<Self> {
        let ops = validate(&commands)?;
        let labels = label_index(&commands, &ops);
        Ok(Self {
            commands,
            ops,
            labels,
        })
    }

    /// Loads a program from source text, treating it as file `file`.
    ///
    /// `!import` lines in the text cannot resolve and produce an `Io` error.
    ///
    /// # Errors
    ///
    /// Returns any load-time error.
    pub fn from_source(source: &str, file: &str) -> Result<Self> {
        load(file, &MemorySource::new().with_file(file, source))
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the program has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the command and op at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<(&Command, Op)> {
        Some((self.commands.get(position)?, *self.ops.get(position)?))
    }

    /// Position of `label`, if declared.
    #[must_use]
    pub fn label(&self, label: &str) -> Option<usize> {
        self.labels.get(label).copied()
    }

    /// Where execution starts: the `main` label, or position 0.
    #[must_use]
    pub fn entry(&self) -> usize {
        self.label(ENTRY_LABEL).unwrap_or(0)
    }
}
