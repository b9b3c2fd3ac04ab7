//! `moelog` - convenience logging facade.
//!
//! One call configures a console handler (colorized line or JSON) and an
//! optional size-rolled file handler, registers the `TIMER` and `APP_INFO`
//! severities, and installs the result as the process-wide configuration.
//!
//! # Example
//!
//! ```
//! use moelog::MoeLogger;
//!
//! let moe = MoeLogger::builder()
//!     .structured_output(true)
//!     .minimum_level("info")
//!     .extra_field("service", "svc_name")
//!     .build()
//!     .unwrap();
//!
//! moe.update_filter("svc_name", "checkout");
//!
//! let log = moe.logger("orders");
//! log.info("order accepted");
//! log.timer("checkout took 12ms");
//! moelog::warning!(log, "retrying payment {} of {}", 1, 3);
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `moelog` command-line emitter

pub mod config;
pub mod dispatch;
mod error;
pub mod filter;
pub mod fmt;
pub mod handler;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod record;

pub use config::LoggerConfig;
pub use error::Error;
pub use filter::AttributeFilter;
pub use fmt::{
    Color, ColorPair, ConsoleFormatter, ExtraField, Formatter, Palette, StructuredFormatter,
};
pub use handler::Handler;
pub use level::{Level, ParseLevelError, Registration, SeverityRegistry, registry};
pub use logger::{Event, Logger, MoeLogger, MoeLoggerBuilder, get_logger, quick_setup};
pub use output::{FileOutput, MemoryOutput, Output, TerminalOutput};
pub use record::{Callsite, LogRecord};
