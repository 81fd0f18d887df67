//! Runtime value type for Weird programs.

use std::fmt;
use std::sync::Arc;

use crate::kind::Kind;

/// Interned-by-sharing identifier text.
pub type Name = Arc<str>;

/// Runtime value.
///
/// Vectors use a persistent `im::Vector`, so cloning any value is O(1) and
/// snapshots taken by loops do not copy element storage.
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// 32-bit floating point.
    Float(f32),
    /// Single character.
    Char(char),
    /// Ordered sequence of values; a "string" when every element is a `Char`.
    Vector(im::Vector<Value>),
    /// Symbolic name. Only ever appears as a command argument.
    Ident(Name),
}

impl Value {
    /// Builds a vector of characters from a string.
    #[must_use]
    pub fn chars(s: &str) -> Self {
        Self::Vector(s.chars().map(Self::Char).collect())
    }

    /// Builds an identifier value.
    #[must_use]
    pub fn ident(name: &str) -> Self {
        Self::Ident(name.into())
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Char(_) => Kind::Char,
            Self::Vector(_) => Kind::Vector,
            Self::Ident(_) => Kind::Ident,
        }
    }

    /// Returns true if this value is an identifier.
    #[must_use]
    pub const fn is_ident(&self) -> bool {
        matches!(self, Self::Ident(_))
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a character value.
    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Attempts to extract a vector reference.
    #[must_use]
    pub const fn as_vector(&self) -> Option<&im::Vector<Value>> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract a mutable vector reference.
    pub fn as_vector_mut(&mut self) -> Option<&mut im::Vector<Value>> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract an identifier name.
    #[must_use]
    pub fn as_ident(&self) -> Option<&Name> {
        match self {
            Self::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this is a vector made up only of characters.
    ///
    /// The empty vector counts as a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.as_vector()
            .is_some_and(|v| v.iter().all(|item| matches!(item, Self::Char(_))))
    }
}

// Float comparison uses bit equality so that Eq stays reflexive.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Vector(a), Self::Vector(b)) => a == b,
            (Self::Ident(a), Self::Ident(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Char(c) => write!(f, "{c:?}"),
            Self::Vector(v) => f.debug_list().entries(v.iter()).finish(),
            Self::Ident(name) => write!(f, ":{name}"),
        }
    }
}

/// Renders a value the way `put` prints it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            // Debug keeps the trailing ".0" on whole floats and switches to
            // `1e20` style outside 1e-4..1e16.
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Vector(v) if self.is_string() => {
                for item in v {
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Vector(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Ident(name) => write!(f, ":{name}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Float(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Vector(v.into_iter().map(Into::into).collect())
    }
}
