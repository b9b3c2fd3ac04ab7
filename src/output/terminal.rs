//! Console sink. Everything goes to stderr so stdout stays free for program output.

use super::Output;
use crate::level::Level;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write(&self, _level: &Level, line: &str) -> Result<(), crate::Error> {
        // Holding the stderr lock keeps concurrent lines from interleaving.
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{line}")?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stderr().flush()?;
        Ok(())
    }
}
