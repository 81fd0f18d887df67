//! Core values, kinds, and errors for the Weird interpreter.
//!
//! This crate provides:
//! - [`Value`] - The runtime value type (integers, floats, characters, vectors, identifiers)
//! - [`Kind`] - Fieldless value discriminants used for shape checking
//! - [`Error`] - Rich error types with source location context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod kind;
mod value;

pub use error::{Error, ErrorContext, ErrorKind, Result, SemanticLimit};
pub use kind::Kind;
pub use value::{Name, Value};
