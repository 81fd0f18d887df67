//! The command dispatch table.
//!
//! Every command name maps to one [`Op`]. Each op declares the argument
//! shapes it accepts; execution lives in `interpreter::ops`.

use std::fmt;

use weird_foundation::Kind;

/// Accepted kinds at one argument position.
pub type KindSet = &'static [Kind];

/// An ordered list of argument positions.
pub type Shape = &'static [KindSet];

const ANY: KindSet = &[Kind::Ident, Kind::Int, Kind::Float, Kind::Vector, Kind::Char];
const NUMERIC: KindSet = &[Kind::Ident, Kind::Int, Kind::Float];
const IDENT: KindSet = &[Kind::Ident];
const VECTOR: KindSet = &[Kind::Ident, Kind::Vector];

const NO_ARGS: Shape = &[];
const LABEL: Shape = &[IDENT];
const VALUE: Shape = &[ANY];
const ASSIGN: Shape = &[IDENT, ANY];
const EACH: Shape = &[IDENT, VECTOR, IDENT, IDENT];
const ADD: Shape = &[NUMERIC, NUMERIC, IDENT];

/// One executable operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// No effect; blank and comment lines.
    Noop,
    /// Declares a jump target.
    Label,
    /// Prints a value.
    Put,
    /// Pushes a memory frame.
    PushFrame,
    /// Pops a memory frame.
    PopFrame,
    /// Nearest-binding-or-global assignment.
    Set,
    /// Innermost-frame assignment.
    LocalSet,
    /// Unconditional jump to a label.
    Jmp,
    /// Ends the program with status 0.
    Exit,
    /// Records a return point.
    SetTrap,
    /// Resumes at a recorded return point.
    ReturnToTrap,
    /// `set_trap` then `jmp` on the same label.
    TrappedJmp,
    /// Appends to a vector in place.
    VecPush,
    /// Trap-driven iteration over a vector.
    Each,
    /// Same-kind addition.
    Add,
}

impl Op {
    /// Every op, in table order.
    pub const ALL: [Op; 15] = [
        Op::Noop,
        Op::Label,
        Op::Put,
        Op::PushFrame,
        Op::PopFrame,
        Op::Set,
        Op::LocalSet,
        Op::Jmp,
        Op::Exit,
        Op::SetTrap,
        Op::ReturnToTrap,
        Op::TrappedJmp,
        Op::VecPush,
        Op::Each,
        Op::Add,
    ];

    /// The command name as written in source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::Label => "label",
            Self::Put => "put",
            Self::PushFrame => "pushframe",
            Self::PopFrame => "popframe",
            Self::Set => "set",
            Self::LocalSet => "local_set",
            Self::Jmp => "jmp",
            Self::Exit => "exit",
            Self::SetTrap => "set_trap",
            Self::ReturnToTrap => "return_to_trap",
            Self::TrappedJmp => "trapped_jmp",
            Self::VecPush => "vec_push",
            Self::Each => "each",
            Self::Add => "add",
        }
    }

    /// Looks up an op by command name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// The argument shapes this op accepts.
    #[must_use]
    pub const fn shapes(self) -> &'static [Shape] {
        match self {
            Self::Noop | Self::PushFrame | Self::PopFrame | Self::Exit => &[NO_ARGS],
            Self::Label | Self::Jmp | Self::SetTrap | Self::ReturnToTrap | Self::TrappedJmp => {
                &[LABEL]
            }
            Self::Put => &[VALUE],
            Self::Set | Self::LocalSet | Self::VecPush => &[ASSIGN],
            Self::Each => &[EACH],
            Self::Add => &[ADD],
        }
    }

    /// Returns true if `kinds` matches one of the accepted shapes.
    #[must_use]
    pub fn accepts(self, kinds: &[Kind]) -> bool {
        self.shapes().iter().any(|shape| {
            shape.len() == kinds.len()
                && shape
                    .iter()
                    .zip(kinds)
                    .all(|(allowed, kind)| allowed.contains(kind))
        })
    }

    /// Human-readable description of the accepted shapes.
    #[must_use]
    pub fn describe_shapes(self) -> String {
        self.shapes()
            .iter()
            .map(|shape| {
                let positions: Vec<String> = shape
                    .iter()
                    .map(|set| {
                        set.iter()
                            .map(|kind| kind.name())
                            .collect::<Vec<_>>()
                            .join("|")
                    })
                    .collect();
                format!("({})", positions.join(", "))
            })
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
