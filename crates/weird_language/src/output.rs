//! Output sinks for `put`.

use std::io::{self, Write};

use weird_foundation::{Error, ErrorKind, Result};

/// Receives rendered output lines.
pub trait OutputSink {
    /// Writes one line; the sink adds the terminator.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the line cannot be written.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Collects lines in memory.
impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}

/// Writes lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(io::stdout().lock(), "{line}").map_err(|e| {
            Error::new(ErrorKind::Io {
                path: "<stdout>".to_string(),
                message: e.to_string(),
            })
        })
    }
}
