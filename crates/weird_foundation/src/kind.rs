//! Value kinds for argument shape checking.

use std::fmt;

/// The kind of a [`Value`](crate::Value), without its payload.
///
/// Command shapes are declared in terms of kinds, so validation never
/// needs to look at argument payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// 64-bit signed integer.
    Int,
    /// 32-bit floating point.
    Float,
    /// Single character.
    Char,
    /// Ordered sequence of values.
    Vector,
    /// Symbolic name referring to a storage cell or label.
    Ident,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 5] = [Kind::Int, Kind::Float, Kind::Char, Kind::Vector, Kind::Ident];

    /// Returns the name used for this kind in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "i64",
            Self::Float => "f32",
            Self::Char => "char",
            Self::Vector => "vector",
            Self::Ident => "ident",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
