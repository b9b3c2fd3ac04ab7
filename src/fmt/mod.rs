//! Record rendering: colors, the level palette, timestamps, and the two formatters.

mod color;
mod console;
mod palette;
mod structured;
pub mod timestamp;

pub use color::{Color, colorize};
pub use console::ConsoleFormatter;
pub use palette::{ColorPair, Palette};
pub use structured::{ExtraField, StructuredFormatter};

use crate::record::LogRecord;

/// Turns a record into the exact text a handler writes (without trailing newline).
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> String;
}
