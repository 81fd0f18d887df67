//! Integration tests for Error types
//!
//! Tests error construction, display, context, and load/run classification.

use weird_foundation::{Error, ErrorContext, ErrorKind, Kind, SemanticLimit};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_reference() {
    let err = Error::invalid_reference("count");
    assert!(matches!(err.kind, ErrorKind::InvalidReference(_)));
    assert!(format!("{err}").contains("count"));
}

#[test]
fn error_unknown_command() {
    let err = Error::unknown_command("frob");
    assert!(matches!(err.kind, ErrorKind::UnknownCommand(_)));
    assert!(format!("{err}").contains("frob"));
}

#[test]
fn error_internal() {
    let err = Error::internal("broken");
    assert!(format!("{err}").contains("broken"));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_operand_mismatch() {
    let err = Error::new(ErrorKind::OperandMismatch {
        left: Kind::Int,
        right: Kind::Float,
    });
    let msg = format!("{err}");
    assert!(msg.contains("i64"));
    assert!(msg.contains("f32"));
}

#[test]
fn error_display_shape_mismatch() {
    let err = Error::new(ErrorKind::ShapeMismatch {
        command: "put".to_string(),
        expected: "(ident|i64)".to_string(),
        actual: "i64, i64".to_string(),
    });
    let msg = format!("{err}");
    assert!(msg.contains("put"));
    assert!(msg.contains("i64, i64"));
}

#[test]
fn error_display_limit() {
    let err = Error::new(ErrorKind::LimitExceeded(SemanticLimit::MaxSteps { limit: 9 }));
    assert!(format!("{err}").contains('9'));
}

#[test]
fn display_omits_context() {
    let err = Error::new(ErrorKind::PopRootFrame).with_context(ErrorContext::new("a.weird", 3));
    assert!(!format!("{err}").contains("a.weird"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display() {
    assert_eq!(ErrorContext::new("lib.weird", 12).to_string(), "at lib.weird:12");
}

#[test]
fn or_context_keeps_innermost() {
    let err = Error::new(ErrorKind::PopRootFrame)
        .with_context(ErrorContext::new("inner.weird", 1))
        .or_context(ErrorContext::new("outer.weird", 9));
    assert_eq!(err.context.unwrap().file, "inner.weird");

    let err = Error::new(ErrorKind::PopRootFrame).or_context(ErrorContext::new("outer.weird", 9));
    assert_eq!(err.context.unwrap().line, 9);
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn load_errors() {
    assert!(Error::new(ErrorKind::EmptyArgument).is_load_error());
    assert!(Error::new(ErrorKind::MissingImportPath).is_load_error());
    assert!(Error::unknown_command("x").is_load_error());
}

#[test]
fn run_errors() {
    assert!(!Error::new(ErrorKind::PopRootFrame).is_load_error());
    assert!(!Error::new(ErrorKind::TrapNotFound("each".to_string())).is_load_error());
    assert!(!Error::invalid_reference("x").is_load_error());
}
