//! Weird CLI entry point.

use std::env;
use std::process::ExitCode;

use weird_runtime::{CliConfig, init_tracing, render_error, run_file};

/// Exit status for command-line usage errors.
const USAGE_STATUS: u8 = 2;

fn main() -> ExitCode {
    let config = match CliConfig::parse(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            eprintln!("Run `weird --help` for usage.");
            return ExitCode::from(USAGE_STATUS);
        }
    };

    if config.show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if config.show_version {
        println!("weird {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_tracing(config.trace);

    match run_file(&config.run_config()) {
        Ok(status) => exit_code(status),
        Err(e) => {
            eprintln!("\x1b[31m{}\x1b[0m", render_error(&e));
            ExitCode::FAILURE
        }
    }
}

/// Maps a program status onto a process exit code.
fn exit_code(status: i32) -> ExitCode {
    u8::try_from(status).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn print_help() {
    println!(
        "\x1b[1mWeird\x1b[0m - Interpreter for the Weird scripting language

\x1b[1mUSAGE:\x1b[0m
    weird [OPTIONS] [FILE]

\x1b[1mARGUMENTS:\x1b[0m
    [FILE]    Program to run (default: main.weird)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -c, --check        Load and validate the program without running it

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace            Log every executed command to stderr
    --max-steps N      Abort after N executed commands

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG           Log filter, e.g. weird_language=debug

\x1b[1mEXAMPLES:\x1b[0m
    weird                            Run main.weird
    weird loops.weird                Run loops.weird
    weird -c loops.weird             Check loops.weird for load errors
    weird --max-steps 1000 spin.weird
                                     Stop a runaway program

For more information, visit https://github.com/ndouglas/weird"
    );
}
