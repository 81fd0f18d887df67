//! Traps and the `each` loop state machine.
//!
//! A trap is a named return point. `return_to_trap` resumes at the newest
//! trap with a matching label and throws away every newer trap on the way,
//! which is what lets an outer `each` pick up again once an inner one has
//! escaped.
//!
//! `each` keeps its loop state in an [`EachLoop`] attached to the trap it
//! sets. Returning to that trap runs the next step, which binds the next
//! element and arms a fresh trap, or leaves the loop.

use tracing::debug;
use weird_foundation::{Name, Result, Value};

use super::{Flow, Interpreter};
use crate::output::OutputSink;

/// Label of the trap that `each` arms for its body.
pub const EACH_TRAP: &str = "each";

/// A deferred return point.
#[derive(Clone, Debug)]
pub struct Trap {
    /// Name used by `return_to_trap`.
    pub label: Name,
    /// Position to resume at.
    pub resume_at: usize,
    /// Loop step to run after resuming.
    pub continuation: Option<EachLoop>,
}

/// Pending traps, newest last.
#[derive(Clone, Debug, Default)]
pub struct TrapStack {
    traps: Vec<Trap>,
}

impl TrapStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending traps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.traps.len()
    }

    /// Returns true if there are no pending traps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traps.is_empty()
    }

    /// Records a trap as the newest.
    pub fn push(&mut self, trap: Trap) {
        self.traps.push(trap);
    }

    /// Labels from newest to oldest.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.traps.iter().rev().map(|trap| &*trap.label)
    }

    /// Removes and returns the newest trap named `label`, discarding every
    /// trap newer than it.
    ///
    /// Leaves the stack untouched when nothing matches.
    pub fn unwind_to(&mut self, label: &str) -> Option<Trap> {
        let index = self.traps.iter().rposition(|trap| &*trap.label == label)?;
        let discarded = self.traps.len() - index - 1;
        if discarded > 0 {
            debug!(label, discarded, "discarded newer traps");
        }
        self.traps.truncate(index + 1);
        self.traps.pop()
    }
}

/// Resumable state of one `each` loop.
#[derive(Clone, Debug, PartialEq)]
pub struct EachLoop {
    /// Name the current element is bound to.
    pub item: Name,
    /// Snapshot of the vector being iterated.
    pub items: im::Vector<Value>,
    /// Label of the loop body.
    pub body: Name,
    /// Label to continue at once every element has been visited.
    pub escape: Name,
    /// Index of the element the next step binds.
    pub next: usize,
}

impl EachLoop {
    /// Creates a loop positioned at the first element.
    #[must_use]
    pub fn new(item: Name, items: im::Vector<Value>, body: Name, escape: Name) -> Self {
        Self {
            item,
            items,
            body,
            escape,
            next: 0,
        }
    }

    /// Runs one step of the loop.
    ///
    /// Expects the loop's own frame to be the innermost one. When elements
    /// remain, binds the next one (rebinding an existing variable of that
    /// name, otherwise in the loop frame), arms an [`EACH_TRAP`] trap holding
    /// the following step, and jumps to the body. Otherwise pops the frame
    /// and jumps to the escape label.
    ///
    /// # Errors
    ///
    /// Returns a memory error from binding or popping the frame.
    pub fn step<O: OutputSink>(self, interp: &mut Interpreter<'_, O>) -> Result<Flow> {
        let Some(item) = self.items.get(self.next).cloned() else {
            interp.memory_mut().pop_frame()?;
            return Ok(interp.jump(&self.escape));
        };

        interp.memory_mut().set_or_local(self.item.clone(), item)?;
        let body = self.body.clone();
        let following = Self {
            next: self.next + 1,
            ..self
        };
        interp.set_trap(EACH_TRAP.into(), Some(following));
        Ok(interp.jump(&body))
    }
}
