//! Error types for the Weird interpreter.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Load-time kinds reject a program before it runs; run-time kinds stop the
//! interpreter at the failing command.

use std::fmt;

use thiserror::Error;

use crate::kind::Kind;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Weird operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Where the error occurred, when known.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Adds context unless the error already carries some.
    ///
    /// The innermost location wins, which matters for errors raised while a
    /// trap continuation re-enters a loop.
    #[must_use]
    pub fn or_context(self, context: ErrorContext) -> Self {
        if self.context.is_some() {
            self
        } else {
            self.with_context(context)
        }
    }

    /// Creates an invalid reference error.
    #[must_use]
    pub fn invalid_reference(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidReference(name.into()))
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error is detected before execution starts.
    #[must_use]
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnrecognizedSigil(_)
                | ErrorKind::EmptyArgument
                | ErrorKind::MissingCharacter
                | ErrorKind::IntegerOutOfRange(_)
                | ErrorKind::MissingImportPath
                | ErrorKind::Io { .. }
                | ErrorKind::UnknownCommand(_)
                | ErrorKind::ShapeMismatch { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument started with a character that is not a sigil.
    #[error("unrecognised sigil `{0}`")]
    UnrecognizedSigil(char),

    /// An argument list contained an empty entry.
    #[error("empty argument")]
    EmptyArgument,

    /// A `'` sigil with no character after it.
    #[error("missing character after `'`")]
    MissingCharacter,

    /// An integer literal does not fit in 64 bits.
    #[error("integer literal out of range: {0}")]
    IntegerOutOfRange(String),

    /// `!import` without a path.
    #[error("import directive requires a path")]
    MissingImportPath,

    /// Source text could not be read.
    #[error("cannot read {path}: {message}")]
    Io {
        /// The path that was read.
        path: String,
        /// The underlying failure.
        message: String,
    },

    /// A command name not present in the dispatch table.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// Argument kinds do not match any accepted shape.
    #[error("mismatched type arguments for {command}: expected {expected}, got ({actual})")]
    ShapeMismatch {
        /// The command name.
        command: String,
        /// Description of accepted shapes.
        expected: String,
        /// The argument kinds that were supplied.
        actual: String,
    },

    /// An identifier is not bound in any frame.
    #[error("invalid reference {0}")]
    InvalidReference(String),

    /// Attempt to store an identifier into memory.
    #[error("unable to store identifier {0}")]
    StoreIdentifier(String),

    /// Attempt to pop the root frame.
    #[error("unable to pop root frame")]
    PopRootFrame,

    /// Binary operands of different kinds.
    #[error("both operands must be of same type: got {left} and {right}")]
    OperandMismatch {
        /// Kind of the left operand.
        left: Kind,
        /// Kind of the right operand.
        right: Kind,
    },

    /// Operands of a kind the operation does not support.
    #[error("cannot add values of type {0}")]
    UnsupportedOperands(Kind),

    /// Integer arithmetic overflowed.
    #[error("integer overflow")]
    IntegerOverflow,

    /// A vector was required.
    #[error("{name} is not a vector (found {actual})")]
    NotAVector {
        /// What was expected to be a vector.
        name: String,
        /// The kind actually found.
        actual: Kind,
    },

    /// `return_to_trap` found no trap with the requested label.
    #[error("trap {0} not found")]
    TrapNotFound(String),

    /// A run limit was exceeded.
    #[error("limit exceeded: {0}")]
    LimitExceeded(SemanticLimit),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Run limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticLimit {
    /// Maximum executed commands exceeded.
    MaxSteps {
        /// The configured limit.
        limit: u64,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxSteps { limit } => write!(f, "max steps ({limit}) exceeded"),
        }
    }
}

/// Source location of the command that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Originating file name.
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl ErrorContext {
    /// Creates a context for the given file and line.
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}:{}", self.file, self.line)
    }
}
