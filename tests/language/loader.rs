//! Integration tests for the loader
//!
//! Tests import splicing and source locations using in-memory sources.

use weird_foundation::ErrorKind;
use weird_language::{MemorySource, load, load_commands, load_lines};

// =============================================================================
// Import Splicing
// =============================================================================

#[test]
fn import_splices_in_place() {
    let source = MemorySource::new()
        .with_file("main.weird", "put: i1\n!import lib.weird\nput: i3")
        .with_file("lib.weird", "put: i2");
    let lines = load_lines("main.weird", &source).unwrap();
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["put: i1", "put: i2", "put: i3"]);
}

#[test]
fn spliced_lines_keep_their_own_location() {
    let source = MemorySource::new()
        .with_file("main.weird", "!import lib.weird\nput: i9")
        .with_file("lib.weird", "# lib\nput: i2");
    let commands = load_commands("main.weird", &source).unwrap();
    assert_eq!(commands.len(), 3);
    assert_eq!(&*commands[1].location.file, "lib.weird");
    assert_eq!(commands[1].location.line, 2);
    assert_eq!(&*commands[2].location.file, "main.weird");
    assert_eq!(commands[2].location.line, 2);
}

#[test]
fn import_path_is_trimmed() {
    let source = MemorySource::new()
        .with_file("main.weird", "!import    lib.weird   ")
        .with_file("lib.weird", "exit:");
    assert_eq!(load("main.weird", &source).unwrap().len(), 1);
}

#[test]
fn nested_import_is_not_expanded() {
    let source = MemorySource::new()
        .with_file("main.weird", "!import a.weird")
        .with_file("a.weird", "!import b.weird")
        .with_file("b.weird", "exit:");
    let lines = load_lines("main.weird", &source).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "!import b.weird");

    // The leftover directive is not a command.
    let err = load("main.weird", &source).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCommand(_)));
    assert_eq!(err.context.unwrap().file, "a.weird");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn missing_import_path() {
    let source = MemorySource::new().with_file("main.weird", "put: i1\n!import");
    let err = load("main.weird", &source).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingImportPath));
    assert_eq!(err.context.unwrap().line, 2);
}

#[test]
fn missing_import_file_points_at_directive() {
    let source = MemorySource::new().with_file("main.weird", "\n\n!import gone.weird");
    let err = load("main.weird", &source).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    let ctx = err.context.unwrap();
    assert_eq!(ctx.file, "main.weird");
    assert_eq!(ctx.line, 3);
}

#[test]
fn missing_entry_file() {
    let err = load("main.weird", &MemorySource::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert!(err.context.is_none());
}
