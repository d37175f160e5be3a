//! Console sink writer.

use std::io::{self, Write};

use crate::level::Level;
use crate::sink::LineWriter;

/// Writes lines to stdout, taking the lock per record so concurrent callers
/// never interleave within a line.
#[derive(Debug, Default)]
pub struct ConsoleWriter;

impl LineWriter for ConsoleWriter {
    fn write_line(&self, _level: Level, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}
