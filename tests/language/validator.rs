//! Integration tests for validation and program assembly
//!
//! Tests dispatch lookup, shape checking, and label indexing.

use weird_foundation::ErrorKind;
use weird_language::validator::{label_index, validate};
use weird_language::{Location, Op, Program, parse_line};

fn commands(source: &str) -> Vec<weird_language::Command> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| parse_line(line, Location::new("v.weird", i + 1)).unwrap())
        .collect()
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn validate_resolves_ops() {
    let ops = validate(&commands("label: main\nput: i1\n\nexit:")).unwrap();
    assert_eq!(ops, vec![Op::Label, Op::Put, Op::Noop, Op::Exit]);
}

#[test]
fn validate_rejects_unknown_command() {
    let err = validate(&commands("put: i1\nprint: i1")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCommand(ref name) if name == "print"));
    assert_eq!(err.context.unwrap().line, 2);
}

#[test]
fn validate_rejects_wrong_shape() {
    let err = validate(&commands("jmp: i3")).unwrap_err();
    match err.kind {
        ErrorKind::ShapeMismatch {
            command,
            expected,
            actual,
        } => {
            assert_eq!(command, "jmp");
            assert_eq!(expected, "(ident)");
            assert_eq!(actual, "i64");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validate_rejects_wrong_arity() {
    assert!(validate(&commands("put: i1, i2")).is_err());
    assert!(validate(&commands("exit: i0")).is_err());
    assert!(validate(&commands("add: i1, i2")).is_err());
}

#[test]
fn validate_rejects_literal_vector_operand_to_add() {
    let err = validate(&commands("add: \"ab, \"cd, :out")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ShapeMismatch { .. }));
}

#[test]
fn validate_accepts_literal_or_identifier_each_target() {
    assert!(validate(&commands("each: :c, \"ab, :b, :d")).is_ok());
    assert!(validate(&commands("each: :c, :v, :b, :d")).is_ok());
    assert!(validate(&commands("each: :c, i3, :b, :d")).is_err());
}

// =============================================================================
// Labels
// =============================================================================

#[test]
fn label_index_maps_positions() {
    let cmds = commands("put: i1\nlabel: a\nlabel: b");
    let ops = validate(&cmds).unwrap();
    let labels = label_index(&cmds, &ops);
    assert_eq!(labels.get("a"), Some(&1));
    assert_eq!(labels.get("b"), Some(&2));
    assert_eq!(labels.len(), 2);
}

#[test]
fn duplicate_label_last_wins() {
    let program = Program::from_source("label: x\nput: i1\nlabel: x", "dup.weird").unwrap();
    assert_eq!(program.label("x"), Some(2));
}

#[test]
fn entry_is_main_or_zero() {
    let with_main = Program::from_source("put: i1\nlabel: main", "p.weird").unwrap();
    assert_eq!(with_main.entry(), 1);
    let without = Program::from_source("put: i1", "p.weird").unwrap();
    assert_eq!(without.entry(), 0);
}
