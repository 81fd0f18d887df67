//! Command-line and run configuration.

use std::path::PathBuf;

use thiserror::Error;
use weird_language::Limits;

/// Program run when no file is given.
pub const DEFAULT_FILE: &str = "main.weird";

/// Errors in command-line usage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// An option that takes a value was last on the line.
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    /// An option value could not be parsed.
    #[error("invalid {option} value: {value}")]
    InvalidValue {
        /// The option.
        option: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An option that does not exist.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// More than one program file.
    #[error("unexpected argument: {0}")]
    ExtraArgument(String),
}

/// CLI configuration parsed from arguments.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Program to run.
    pub file: Option<PathBuf>,
    /// Load and validate without running.
    pub check_only: bool,
    /// Log every executed command.
    pub trace: bool,
    /// Abort after this many commands.
    pub max_steps: Option<u64>,
    /// Print help and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

impl CliConfig {
    /// Parses arguments, not including the program name.
    ///
    /// # Errors
    ///
    /// Returns a [`CliError`] for unknown options, missing or malformed
    /// option values, and a second file argument.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-c" | "--check" => config.check_only = true,
                "--trace" => config.trace = true,
                "--max-steps" => {
                    let value = args.next().ok_or(CliError::MissingValue("--max-steps"))?;
                    let steps = value.parse().map_err(|_| CliError::InvalidValue {
                        option: "--max-steps",
                        value,
                    })?;
                    config.max_steps = Some(steps);
                }
                option if option.starts_with('-') && option.len() > 1 => {
                    return Err(CliError::UnknownOption(arg));
                }
                _ if config.file.is_some() => return Err(CliError::ExtraArgument(arg)),
                _ => config.file = Some(PathBuf::from(arg)),
            }
        }

        Ok(config)
    }

    /// The run this command line asks for.
    #[must_use]
    pub fn run_config(&self) -> RunConfig {
        let file = self
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE));
        let mut limits = Limits::unlimited();
        if let Some(steps) = self.max_steps {
            limits = limits.with_max_steps(steps);
        }
        RunConfig {
            file,
            limits,
            check_only: self.check_only,
        }
    }
}

/// What to load and how to run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Program file.
    pub file: PathBuf,
    /// Interpreter limits.
    pub limits: Limits,
    /// Stop after loading.
    pub check_only: bool,
}

impl RunConfig {
    /// Runs `file` with no limits.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            limits: Limits::unlimited(),
            check_only: false,
        }
    }

    /// Sets interpreter limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Only loads and validates.
    #[must_use]
    pub const fn check_only(mut self) -> Self {
        self.check_only = true;
        self
    }
}
