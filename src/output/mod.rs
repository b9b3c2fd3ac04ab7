//! Sinks that receive fully formatted lines. The `Output` trait lets callers
//! swap the console stream (e.g. for an in-memory capture) without touching
//! the formatter or filter stages.

mod file;
mod memory;
pub mod rollover;
pub mod size;
mod terminal;

pub use file::FileOutput;
pub use memory::MemoryOutput;
pub use terminal::TerminalOutput;

use crate::level::Level;

/// `Send + Sync` so a handler can be shared by every thread that logs.
/// Implementations serialize their own writes.
pub trait Output: Send + Sync {
    /// Writes one formatted line; the sink appends the newline.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write(&self, level: &Level, line: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
