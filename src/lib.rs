//! Weird - Interpreter for a line-oriented, label-based scripting language
//!
//! This crate re-exports all layers of the Weird system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: weird_runtime     — CLI, run configuration, logging setup
//! Layer 1: weird_language    — Loader, parser, validator, interpreter
//! Layer 0: weird_foundation  — Core types (Value, Kind, Error)
//! ```

pub use weird_foundation as foundation;
pub use weird_language as language;
pub use weird_runtime as runtime;
