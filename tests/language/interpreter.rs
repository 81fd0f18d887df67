//! Integration tests for the interpreter
//!
//! Tests the public driver API: stepping, sinks, limits, and memory.

use weird_foundation::{ErrorKind, Value};
use weird_language::{Interpreter, Limits, Memory, OutputSink, Program, run_program, run_source};

// =============================================================================
// Driver
// =============================================================================

#[test]
fn run_source_captures_output() {
    let outcome = run_source("put: \"one\nput: \"two").unwrap();
    assert_eq!(outcome.status, 0);
    assert_eq!(outcome.output, vec!["one", "two"]);
}

#[test]
fn run_source_reports_inline_location() {
    let err = run_source("popframe:").unwrap_err();
    let ctx = err.context.unwrap();
    assert_eq!(ctx.file, weird_language::INLINE_FILE);
    assert_eq!(ctx.line, 1);
}

#[test]
fn program_can_run_twice() {
    let program = Program::from_source("set: :x, i1\nadd: :x, i1, :x\nput: :x", "twice.weird").unwrap();
    let first = run_program(&program, Limits::unlimited()).unwrap();
    let second = run_program(&program, Limits::unlimited()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.output, vec!["2"]);
}

#[test]
fn stepping_exposes_position() {
    let program = Program::from_source("label: main\njmp: :end\nput: i1\nlabel: end", "s.weird").unwrap();
    let mut interp = Interpreter::new(&program, Vec::<String>::new());
    assert_eq!(interp.position(), 0);
    interp.step().unwrap();
    assert_eq!(interp.position(), 1);
    interp.step().unwrap();
    assert_eq!(interp.position(), 3);
    assert_eq!(interp.step().unwrap(), None);
    assert_eq!(interp.step().unwrap(), Some(0));
    assert_eq!(interp.steps(), 3);
}

#[test]
fn max_steps_allows_exactly_the_limit() {
    let program = Program::from_source("put: i1\nput: i2\nput: i3", "l.weird").unwrap();
    let outcome = run_program(&program, Limits::unlimited().with_max_steps(3)).unwrap();
    assert_eq!(outcome.output.len(), 3);

    let err = run_program(&program, Limits::unlimited().with_max_steps(2)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LimitExceeded(_)));
    assert_eq!(err.context.unwrap().line, 3);
}

// =============================================================================
// Output Sinks
// =============================================================================

/// Counts lines instead of storing them.
#[derive(Default)]
struct Counter {
    lines: usize,
    bytes: usize,
}

impl OutputSink for Counter {
    fn write_line(&mut self, line: &str) -> weird_foundation::Result<()> {
        self.lines += 1;
        self.bytes += line.len();
        Ok(())
    }
}

#[test]
fn custom_sink_receives_lines() {
    let program = Program::from_source("put: \"abc\nput: i10", "sink.weird").unwrap();
    let mut interp = Interpreter::new(&program, Counter::default());
    interp.run().unwrap();
    let counter = interp.into_output();
    assert_eq!(counter.lines, 2);
    assert_eq!(counter.bytes, 5);
}

#[test]
fn borrowed_sink_keeps_lines_after_error() {
    let program = Program::from_source("put: i1\nreturn_to_trap: :none\nput: i2", "b.weird").unwrap();
    let mut lines: Vec<String> = Vec::new();
    let err = Interpreter::new(&program, &mut lines).run().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TrapNotFound(_)));
    assert_eq!(lines, vec!["1"]);
}

// =============================================================================
// Memory
// =============================================================================

#[test]
fn memory_frames() {
    let mut memory = Memory::new();
    memory.set("g".into(), Value::Int(1)).unwrap();
    memory.push_frame();
    memory.local_set("l".into(), Value::Int(2)).unwrap();
    memory.set("g".into(), Value::Int(3)).unwrap();
    assert_eq!(memory.depth(), 2);
    memory.pop_frame().unwrap();

    assert_eq!(memory.get("g").unwrap(), &Value::Int(3));
    assert!(memory.get("l").is_err());
    assert!(memory.pop_frame().is_err());
}

#[test]
fn memory_refuses_identifiers() {
    let mut memory = Memory::new();
    let err = memory.set("x".into(), Value::ident("y")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::StoreIdentifier(_)));
}
