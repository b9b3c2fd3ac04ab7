//! Stepwise construction of the facade. `build` performs the setup sequence:
//! custom levels, file handler, console handler, install.

use super::MoeLogger;
use crate::config::LoggerConfig;
use crate::dispatch::Dispatch;
use crate::fmt::{ConsoleFormatter, ExtraField, Formatter, StructuredFormatter};
use crate::handler::Handler;
use crate::internal;
use crate::level::{Level, register_custom_levels, registry};
use crate::output::{FileOutput, Output, TerminalOutput};
use std::path::PathBuf;
use std::sync::Arc;

/// Names accepted as a minimum level; anything else falls back to WARNING.
pub const RECOGNIZED_LEVELS: &[&str] = &[
    "DEBUG", "INFO", "WARN", "WARNING", "ERROR", "CRITICAL", "FATAL",
];

/// File records carry the application name right after the timestamp.
const APP_NAME_FIELD: (&str, &str) = ("app.name", "app_name");

/// Maps a configured minimum level onto a registered one, WARNING when unrecognized.
#[must_use]
pub fn validate_level(name: &str) -> Level {
    let upper = name.trim().to_uppercase();
    if RECOGNIZED_LEVELS.contains(&upper.as_str())
        && let Some(level) = registry().resolve(&upper)
    {
        return level;
    }
    internal::debug(&format!(
        "Unrecognized minimum level {name:?}, falling back to WARNING"
    ));
    Level::WARNING
}

#[derive(Default)]
pub struct MoeLoggerBuilder {
    config: LoggerConfig,
    console_output: Option<Box<dyn Output>>,
}

impl MoeLoggerBuilder {
    /// Starts from [`LoggerConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every setting with the ones from `config`.
    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// JSON on the console instead of the colorized line.
    #[must_use]
    pub const fn structured_output(mut self, enabled: bool) -> Self {
        self.config.structured_output = enabled;
        self
    }

    /// Validated at `build`; unrecognized names fall back to WARNING.
    #[must_use]
    pub fn minimum_level(mut self, level: impl Into<String>) -> Self {
        self.config.minimum_level = level.into();
        self
    }

    /// Declares JSON key `name`, filled from record attribute `source`.
    #[must_use]
    pub fn extra_field(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.config.extra_fields.push(ExtraField::new(name, source));
        self
    }

    /// Adds the dated JSON log file handler.
    #[must_use]
    pub const fn write_to_file(mut self, enabled: bool) -> Self {
        self.config.write_to_file = enabled;
        self
    }

    /// Size past which a new numbered file is started at construction.
    #[must_use]
    pub const fn max_file_bytes(mut self, bytes: u64) -> Self {
        self.config.max_file_bytes = bytes;
        self
    }

    /// Created if missing; a leading `~` is expanded.
    #[must_use]
    pub fn log_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.log_dir = dir.into();
        self
    }

    /// ANSI colors on the console line.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.config.colors = enabled;
        self
    }

    /// Attached as the `app_name` attribute, which file records show as `app.name`.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.config.app_name = Some(name.into());
        self
    }

    /// Console sink other than stderr (an in-memory capture, a pipe).
    #[must_use]
    pub fn console_output(mut self, output: impl Output + 'static) -> Self {
        self.console_output = Some(Box::new(output));
        self
    }

    /// # Errors
    /// Log directory creation or log file open failure when `write_to_file` is set.
    pub fn build(self) -> Result<MoeLogger, crate::Error> {
        let Self {
            config,
            console_output,
        } = self;

        register_custom_levels();
        // ISO-8601 timestamps are fixed in `fmt::timestamp`; nothing to install.

        let (file, file_path) = if config.write_to_file {
            let (handler, path) = build_file_handler(&config)?;
            (Some(Arc::new(handler)), Some(path))
        } else {
            (None, None)
        };

        let level = validate_level(&config.minimum_level);
        let formatter: Box<dyn Formatter> = if config.structured_output {
            Box::new(StructuredFormatter::new(config.extra_fields.iter().cloned()))
        } else {
            Box::new(ConsoleFormatter::new().colors(config.colors))
        };
        let output = console_output.unwrap_or_else(|| Box::new(TerminalOutput::new()));
        let console = Arc::new(Handler::boxed(level.clone(), formatter, output));

        let mut handlers = Vec::with_capacity(2);
        handlers.extend(file.iter().cloned());
        handlers.push(Arc::clone(&console));
        let dispatch = Arc::new(Dispatch::new(level.clone(), handlers));

        let logger = MoeLogger {
            level,
            console,
            file,
            file_path,
            dispatch,
            config,
        };
        if let Some(app_name) = logger.config.app_name.clone() {
            logger.add_filter([("app_name", app_name)]);
        }
        logger.setup();
        Ok(logger)
    }
}

fn build_file_handler(config: &LoggerConfig) -> Result<(Handler, PathBuf), crate::Error> {
    let output = FileOutput::open(&config.resolved_log_dir(), config.max_file_bytes)?;
    let path = output.path().to_path_buf();

    let formatter = StructuredFormatter::new(config.extra_fields.iter().cloned())
        .leading_field(ExtraField::new(APP_NAME_FIELD.0, APP_NAME_FIELD.1));

    let handler = Handler::new(Level::WARNING, formatter, output);
    Ok((handler, path))
}

/// Console-only, colorized, INFO, installed.
///
/// # Errors
/// Never in practice; console setup does not touch the filesystem.
pub fn quick_setup() -> Result<MoeLogger, crate::Error> {
    MoeLogger::builder().minimum_level("INFO").build()
}

