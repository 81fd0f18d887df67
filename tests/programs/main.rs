//! End-to-end program tests
//!
//! Whole programs loaded through the loader, including imports, and run to
//! completion with captured output.

use weird_foundation::ErrorKind;
use weird_language::{Limits, MemorySource, RunOutcome, load, run_program, run_source};

fn run_files(entry: &str, source: &MemorySource) -> RunOutcome {
    let program = load(entry, source).unwrap();
    run_program(&program, Limits::unlimited().with_max_steps(100_000)).unwrap()
}

// =============================================================================
// Core Scenarios
// =============================================================================

#[test]
fn scenario_set_and_print() {
    let outcome = run_source("label: main\nset: :x, i5\nput: :x\nexit:").unwrap();
    assert_eq!(outcome.status, 0);
    assert_eq!(outcome.output, vec!["5"]);
}

#[test]
fn scenario_push_onto_non_vector() {
    let err = run_source("label: main\nset: :x, i5\nvec_push: :x, i1\nput: :x").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotAVector { .. }));
    assert!(!err.is_load_error());
    assert_eq!(err.context.unwrap().line, 3);
}

#[test]
fn scenario_jump_to_missing_label() {
    let outcome = run_source("label: main\njmp: :missing\nput: \"unreachable").unwrap();
    assert_ne!(outcome.status, 0);
    assert!(outcome.output.is_empty());
}

#[test]
fn scenario_nested_each() {
    let source = "\
label: main
set: :count, i0
each: :a, \"xy, :outer, :done
label: outer
each: :b, \"123, :inner, :inner_done
label: inner
add: :count, i1, :count
return_to_trap: :each
label: inner_done
put: :a
return_to_trap: :each
label: done
put: :count
exit:";
    let outcome = run_source(source).unwrap();
    assert_eq!(outcome.status, 0);
    // Each outer pass prints once its inner loop has escaped.
    assert_eq!(outcome.output, vec!["x", "y", "6"]);
}

#[test]
fn scenario_loop_item_overwrites_outer_variable() {
    let source = "\
set: :c, 'z
each: :c, \"ab, :body, :done
label: :body
return_to_trap: :each
label: :done
put: :c";
    assert_eq!(run_source(source).unwrap().output, vec!["b"]);
}

// =============================================================================
// Larger Programs
// =============================================================================

#[test]
fn reverse_a_string() {
    let source = "\
label: main
set: :out, \"
each: :c, \"stressed, :prepend, :done
label: prepend
local_set: :tmp, \"
vec_push: :tmp, :c
add: :tmp, :out, :out
return_to_trap: :each
label: done
put: :out";
    assert_eq!(run_source(source).unwrap().output, vec!["desserts"]);
}

#[test]
fn subroutine_called_twice() {
    let source = "\
label: main
set: :msg, \"first
trapped_jmp: :say
set: :msg, \"second
trapped_jmp: :say
exit:
label: say
put: :msg
return_to_trap: :say";
    assert_eq!(
        run_source(source).unwrap().output,
        vec!["first", "second"]
    );
}

#[test]
fn frames_shadow_and_restore() {
    let source = "\
label: main
set: :depth, i0
pushframe:
local_set: :depth, i1
pushframe:
local_set: :depth, i2
put: :depth
popframe:
put: :depth
popframe:
put: :depth";
    assert_eq!(run_source(source).unwrap().output, vec!["2", "1", "0"]);
}

#[test]
fn float_accumulation() {
    let source = "\
set: :sum, f0
set: :xs, \"
vec_push: :xs, f0.5
vec_push: :xs, f0.25
vec_push: :xs, f1
each: :x, :xs, :body, :done
label: body
add: :sum, :x, :sum
return_to_trap: :each
label: done
put: :sum
put: :xs";
    assert_eq!(
        run_source(source).unwrap().output,
        vec!["1.75", "[0.5, 0.25, 1.0]"]
    );
}

// =============================================================================
// Imports
// =============================================================================

#[test]
fn library_subroutine_from_import() {
    let files = MemorySource::new()
        .with_file(
            "main.weird",
            "label: main\nset: :name, \"world\ntrapped_jmp: :greet\nexit:\n!import greet.weird",
        )
        .with_file(
            "greet.weird",
            "label: greet\nset: :line, \"hello_\nadd: :line, :name, :line\nput: :line\nreturn_to_trap: :greet",
        );
    let outcome = run_files("main.weird", &files);
    assert_eq!(outcome.output, vec!["hello_world"]);
}

#[test]
fn runtime_error_in_import_is_located_there() {
    let files = MemorySource::new()
        .with_file("main.weird", "!import lib.weird\nlabel: main\njmp: :broken")
        .with_file("lib.weird", "label: broken\nput: :undefined");
    let program = load("main.weird", &files).unwrap();
    let err = run_program(&program, Limits::unlimited()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidReference(_)));
    let ctx = err.context.unwrap();
    assert_eq!(ctx.file, "lib.weird");
    assert_eq!(ctx.line, 2);
}
