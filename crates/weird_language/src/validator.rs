//! Static validation of parsed commands.
//!
//! Every command must name an op from the dispatch table, and its argument
//! kinds must match one of that op's shapes. Validation runs over the whole
//! program before anything executes.

use std::collections::HashMap;

use tracing::debug;
use weird_foundation::{Error, ErrorKind, Name, Result};

use crate::command::Command;
use crate::op::Op;

/// Resolves every command to its op, checking argument shapes.
///
/// # Errors
///
/// Returns `UnknownCommand` or `ShapeMismatch` for the first offending
/// command, located at that command.
pub fn validate(commands: &[Command]) -> Result<Vec<Op>> {
    let ops = commands
        .iter()
        .map(validate_command)
        .collect::<Result<Vec<_>>>()?;
    debug!(commands = ops.len(), "validated program");
    Ok(ops)
}

/// Resolves and shape-checks a single command.
///
/// # Errors
///
/// See [`validate`].
pub fn validate_command(command: &Command) -> Result<Op> {
    let op = Op::from_name(&command.name).ok_or_else(|| {
        Error::unknown_command(&*command.name).with_context(command.location.context())
    })?;

    let kinds = command.kinds();
    if !op.accepts(&kinds) {
        let actual = kinds
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::new(ErrorKind::ShapeMismatch {
            command: command.name.to_string(),
            expected: op.describe_shapes(),
            actual,
        })
        .with_context(command.location.context()));
    }

    Ok(op)
}

/// Builds the label index from validated commands.
///
/// A later `label` with the same name replaces an earlier one.
#[must_use]
pub fn label_index(commands: &[Command], ops: &[Op]) -> HashMap<Name, usize> {
    let labels: HashMap<Name, usize> = commands
        .iter()
        .zip(ops)
        .enumerate()
        .filter(|(_, (_, op))| **op == Op::Label)
        .filter_map(|(position, (command, _))| {
            command
                .args
                .first()
                .and_then(|arg| arg.as_ident())
                .map(|name| (name.clone(), position))
        })
        .collect();
    debug!(labels = labels.len(), "built label index");
    labels
}
