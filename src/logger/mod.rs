//! The facade: one configured console handler, an optional file handler, and
//! the attribute filters shared between them. Building it installs its
//! handlers as the process-wide configuration.

mod builder;
mod event;
mod handle;
mod macros;

pub use builder::{MoeLoggerBuilder, RECOGNIZED_LEVELS, quick_setup, validate_level};
pub use event::Event;
pub use handle::{Logger, get_logger};

use crate::config::LoggerConfig;
use crate::dispatch::{self, Dispatch};
use crate::filter::AttributeFilter;
use crate::handler::Handler;
use crate::level::Level;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct MoeLogger {
    config: LoggerConfig,
    /// Validated minimum level.
    level: Level,
    console: Arc<Handler>,
    file: Option<Arc<Handler>>,
    file_path: Option<PathBuf>,
    dispatch: Arc<Dispatch>,
}

impl MoeLogger {
    /// Step-by-step alternative to [`MoeLogger::new`].
    #[must_use]
    pub fn builder() -> MoeLoggerBuilder {
        MoeLoggerBuilder::new()
    }

    /// # Errors
    /// Log directory creation or file open failure when `write_to_file` is set.
    pub fn new(config: LoggerConfig) -> Result<Self, crate::Error> {
        Self::builder().config(config).build()
    }

    /// (Re)installs this logger's handlers as the active configuration.
    /// Repeated calls leave the same single handler set in place.
    pub fn setup(&self) {
        dispatch::install(Arc::clone(&self.dispatch));
    }

    /// Whether unbound handles currently write through this logger.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        dispatch::is_active(&self.dispatch)
    }

    /// Sets attribute `name` on every later record. Updates the first console
    /// filter that declares it, in place; otherwise attaches a new filter.
    pub fn update_filter(&self, name: &str, value: impl Into<String>) {
        if let Some(filter) = self.console.find_filter(name) {
            filter.set(name, value);
            return;
        }
        self.add_filter([(name.to_string(), value.into())]);
    }

    /// Attaches one filter, shared by the console and file handlers.
    pub fn add_filter<K, V>(&self, attributes: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let filter = AttributeFilter::new(attributes);
        if let Some(file) = &self.file {
            file.add_filter(filter.clone());
        }
        self.console.add_filter(filter);
    }

    /// Current value of an attached attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.console
            .find_filter(name)
            .and_then(|filter| filter.get(name))
    }

    /// Filters on the console handler, in attachment order.
    #[must_use]
    pub fn filters(&self) -> Vec<AttributeFilter> {
        self.console.filters()
    }

    /// Number of console filters; `update_filter` on a known name keeps it unchanged.
    #[must_use]
    pub fn filter_count(&self) -> usize {
        self.filters().len()
    }

    /// Minimum level after validation, which may differ from the configured name.
    #[must_use]
    pub const fn effective_level(&self) -> &Level {
        &self.level
    }

    /// Configuration as given, before level validation.
    #[must_use]
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Always present; writes to stderr unless another output was supplied.
    #[must_use]
    pub const fn console_handler(&self) -> &Arc<Handler> {
        &self.console
    }

    /// Present only when `write_to_file` was set.
    #[must_use]
    pub const fn file_handler(&self) -> Option<&Arc<Handler>> {
        self.file.as_ref()
    }

    /// Active log file, when writing to file.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Handle bound to this logger's handlers, whatever is installed globally.
    #[must_use]
    pub fn logger(&self, name: &str) -> Logger {
        Logger::bound(name, Arc::clone(&self.dispatch))
    }

    /// Bound handle named `root`.
    #[must_use]
    pub fn root(&self) -> Logger {
        self.logger("root")
    }

    /// # Errors
    /// The first flush failure.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.dispatch.flush()
    }

    /// Flushes, uninstalls this logger if it is active, and closes the file.
    ///
    /// # Errors
    /// Flush failure.
    pub fn shutdown(self) -> Result<(), crate::Error> {
        self.flush()?;
        dispatch::uninstall(&self.dispatch);
        Ok(())
    }
}
