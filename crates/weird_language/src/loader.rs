//! Program loading with `!import` splicing.
//!
//! An `!import <path>` line in the entry file is replaced, in place, by the
//! lines of `<path>`. Splicing is a single textual pass: imports inside an
//! imported file are left as they are.

use tracing::debug;
use weird_foundation::{Error, ErrorKind, Result};

use crate::command::{Command, Location};
use crate::parser::parse_line;
use crate::program::Program;
use crate::source::SourceReader;

/// Prefix of the import directive.
pub const IMPORT_DIRECTIVE: &str = "!import";

/// A raw source line tagged with where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    /// Line text without terminator.
    pub text: String,
    /// Originating file and line.
    pub location: Location,
}

/// Reads `path` and splices its imports, returning located lines.
///
/// # Errors
///
/// Returns an `Io` error if the entry file or an imported file cannot be
/// read, or `MissingImportPath` for a bare `!import`.
pub fn load_lines<R>(path: &str, reader: &R) -> Result<Vec<SourceLine>>
where
    R: SourceReader + ?Sized,
{
    let entry = tag(path, reader.read_lines(path)?);
    let mut lines = Vec::with_capacity(entry.len());

    for line in entry {
        let Some(rest) = line.text.strip_prefix(IMPORT_DIRECTIVE) else {
            lines.push(line);
            continue;
        };

        let import = rest.trim();
        if import.is_empty() {
            return Err(Error::new(ErrorKind::MissingImportPath).with_context(line.location.context()));
        }

        let imported = reader
            .read_lines(import)
            .map_err(|e| e.with_context(line.location.context()))?;
        debug!(file = import, lines = imported.len(), at = %line.location, "spliced import");
        lines.extend(tag(import, imported));
    }

    Ok(lines)
}

/// Reads and parses `path` into commands, splicing imports.
///
/// # Errors
///
/// Returns the first read or parse error.
pub fn load_commands<R>(path: &str, reader: &R) -> Result<Vec<Command>>
where
    R: SourceReader + ?Sized,
{
    load_lines(path, reader)?
        .into_iter()
        .map(|line| parse_line(&line.text, line.location))
        .collect()
}

/// Loads, parses, and validates `path` into a runnable program.
///
/// # Errors
///
/// Returns any load-time error; nothing is executed.
#[tracing::instrument(level = "debug", skip(reader))]
pub fn load<R>(path: &str, reader: &R) -> Result<Program>
where
    R: SourceReader + ?Sized,
{
    Program::new(load_commands(path, reader)?)
}

fn tag(file: &str, lines: Vec<String>) -> Vec<SourceLine> {
    let file: weird_foundation::Name = file.into();
    lines
        .into_iter()
        .enumerate()
        .map(|(index, text)| SourceLine {
            text,
            location: Location::new(file.clone(), index + 1),
        })
        .collect()
}
