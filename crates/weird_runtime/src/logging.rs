//! Log subscriber setup.
//!
//! Logs go to stderr so they never mix with program output.

use std::sync::Once;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static TRACING_INIT: Once = Once::new();

/// Directive enabled by `--trace`.
pub const TRACE_DIRECTIVE: &str = "weird_language=trace";

/// Installs the global subscriber.
///
/// Filtering comes from `RUST_LOG`. With `trace` set, interpreter steps are
/// logged as well. Nothing is installed when neither asks for output. Only
/// the first call has any effect.
pub fn init_tracing(trace: bool) {
    TRACING_INIT.call_once(|| {
        let Some(filter) = build_filter(trace, std::env::var("RUST_LOG").ok().as_deref()) else {
            return;
        };
        // Another subscriber may already be installed by an embedder.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Builds the filter for the given `RUST_LOG` value and `--trace` flag.
fn build_filter(trace: bool, rust_log: Option<&str>) -> Option<EnvFilter> {
    let filter = match rust_log {
        Some(directives) => EnvFilter::new(directives),
        None if trace => EnvFilter::default(),
        None => return None,
    };
    if !trace {
        return Some(filter);
    }
    match TRACE_DIRECTIVE.parse::<Directive>() {
        Ok(directive) => Some(filter.add_directive(directive)),
        Err(_) => Some(filter),
    }
}
