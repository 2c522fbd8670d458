// src/output/console.rs
// =============================================================================
// Everything the tool prints to stdout goes through here: progress lines,
// warnings and the result itself.
//
// A write that fails (disk full, closed descriptor) becomes a SinkError so
// the run ends with exit code 1 instead of a panic. A closed pipe, as in
// `wayrecon -u x | head`, is treated as the reader having seen enough and
// is silently ignored.
// =============================================================================

use std::fmt::Display;
use std::io::{self, ErrorKind, Write};

use crate::error::SinkError;

pub struct Console<W: Write> {
    out: W,
    decorate: bool,
}

impl Console<io::Stdout> {
    /// Console on stdout; progress lines only when `decorate` is set
    pub fn stdout(decorate: bool) -> Self {
        Console::new(io::stdout(), decorate)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, decorate: bool) -> Self {
        Console { out, decorate }
    }

    /// A decorative line, dropped in verbose mode
    pub fn progress(&mut self, text: impl Display) -> Result<(), SinkError> {
        if !self.decorate {
            return Ok(());
        }
        self.say(text)
    }

    /// A line printed in every mode
    pub fn say(&mut self, text: impl Display) -> Result<(), SinkError> {
        write_line(&mut self.out, text)
    }
}

// Writes one line and flushes it
fn write_line<W: Write>(out: &mut W, text: impl Display) -> Result<(), SinkError> {
    match writeln!(out, "{}", text).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(SinkError::Stdout(e)),
    }
}
