//! The fetch-execute driver.
//!
//! The interpreter walks a validated [`Program`] one command at a time.
//! After each command the position advances by one, unless the command
//! jumped, in which case the new position is used as is for the next fetch.
//!
//! # Termination
//!
//! Commands never exit the process. `exit` and an unknown jump target
//! produce [`Flow::Halt`], which [`Interpreter::run`] returns as the status
//! code. Falling off the end of the program is status 0. Fatal conditions
//! are `Err` values carrying the failing command's location.

mod ops;
mod trap;

pub use trap::{EACH_TRAP, EachLoop, Trap, TrapStack};

use tracing::{debug, trace};
use weird_foundation::{Error, ErrorKind, Name, Result, SemanticLimit, Value};

use crate::memory::Memory;
use crate::output::{OutputSink, StdoutSink};
use crate::program::Program;

/// What the driver does after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Stop with the given status code.
    Halt(i32),
}

/// Status code for an unknown jump target.
pub const UNKNOWN_LABEL_STATUS: i32 = 1;

/// Run limits (kill switches).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of commands to execute, if any.
    pub max_steps: Option<u64>,
}

impl Limits {
    /// No limits.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { max_steps: None }
    }

    /// Limits execution to `max_steps` commands.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }
}

/// Interpreter state for one run of a program.
pub struct Interpreter<'p, O: OutputSink = StdoutSink> {
    program: &'p Program,
    memory: Memory,
    traps: TrapStack,
    position: usize,
    /// Set by a jump; suppresses the next fall-through increment.
    jumped: bool,
    output: O,
    limits: Limits,
    steps: u64,
}

impl<'p, O: OutputSink> Interpreter<'p, O> {
    /// Creates an interpreter positioned at the program's entry.
    #[must_use]
    pub fn new(program: &'p Program, output: O) -> Self {
        Self {
            program,
            memory: Memory::new(),
            traps: TrapStack::new(),
            position: program.entry(),
            jumped: false,
            output,
            limits: Limits::unlimited(),
            steps: 0,
        }
    }

    /// Sets run limits.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Runs until the program halts or falls off the end.
    ///
    /// Returns the exit status.
    ///
    /// # Errors
    ///
    /// Returns the first run-time error, located at the failing command.
    pub fn run(&mut self) -> Result<i32> {
        loop {
            if let Some(status) = self.step()? {
                debug!(status, steps = self.steps, "program finished");
                return Ok(status);
            }
        }
    }

    /// Executes one command.
    ///
    /// Returns `Some(status)` once the program has finished.
    ///
    /// # Errors
    ///
    /// Returns a run-time error, located at the failing command.
    pub fn step(&mut self) -> Result<Option<i32>> {
        let program = self.program;
        let Some((command, op)) = program.get(self.position) else {
            return Ok(Some(0));
        };

        self.steps += 1;
        if let Some(limit) = self.limits.max_steps.filter(|limit| self.steps > *limit) {
            return Err(Error::new(ErrorKind::LimitExceeded(SemanticLimit::MaxSteps { limit }))
                .with_context(command.location.context()));
        }

        trace!(
            position = self.position,
            op = op.name(),
            location = %command.location,
            "execute"
        );

        let flow = op
            .execute(self, &command.args)
            .map_err(|e| e.or_context(command.location.context()))?;
        if let Flow::Halt(status) = flow {
            return Ok(Some(status));
        }

        if self.jumped {
            self.jumped = false;
        } else {
            self.position += 1;
        }
        Ok(None)
    }

    /// Moves to `label`.
    ///
    /// An unknown label halts with [`UNKNOWN_LABEL_STATUS`] and no diagnostic.
    pub fn jump(&mut self, label: &str) -> Flow {
        if let Some(target) = self.program.label(label) {
            self.position = target;
            self.jumped = true;
            Flow::Continue
        } else {
            debug!(label, "jump target not found");
            Flow::Halt(UNKNOWN_LABEL_STATUS)
        }
    }

    /// Records a trap that resumes after the current command.
    pub fn set_trap(&mut self, label: Name, continuation: Option<EachLoop>) {
        let resume_at = self.position + 1;
        debug!(label = &*label, resume_at, "set trap");
        self.traps.push(Trap {
            label,
            resume_at,
            continuation,
        });
    }

    /// Resumes at the newest trap named `label`, discarding newer traps.
    ///
    /// Runs the trap's continuation, if it has one, after repositioning.
    ///
    /// # Errors
    ///
    /// Returns `TrapNotFound` if no trap has that label, or whatever the
    /// continuation fails with.
    pub fn return_to_trap(&mut self, label: &str) -> Result<Flow> {
        let trap = self
            .traps
            .unwind_to(label)
            .ok_or_else(|| Error::new(ErrorKind::TrapNotFound(label.to_string())))?;
        debug!(label, resume_at = trap.resume_at, "returned to trap");

        self.position = trap.resume_at;
        self.jumped = true;
        match trap.continuation {
            Some(each) => each.step(self),
            None => Ok(Flow::Continue),
        }
    }

    /// Resolves an identifier argument to its bound value; other values are
    /// returned as they are.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` for an unbound identifier.
    pub fn deref(&self, value: &Value) -> Result<Value> {
        match value {
            Value::Ident(name) => self.memory.get(name).cloned(),
            other => Ok(other.clone()),
        }
    }

    /// Writes a line to the output sink.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn emit(&mut self, line: &str) -> Result<()> {
        self.output.write_line(line)
    }

    /// The program being run.
    #[must_use]
    pub const fn program(&self) -> &'p Program {
        self.program
    }

    /// Current command position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of commands executed so far.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Variable storage.
    #[must_use]
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable variable storage.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Pending traps.
    #[must_use]
    pub const fn traps(&self) -> &TrapStack {
        &self.traps
    }

    /// The output sink.
    #[must_use]
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Consumes the interpreter, returning the output sink.
    pub fn into_output(self) -> O {
        self.output
    }
}
