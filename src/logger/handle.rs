//! Named emitting handles.

use super::Event;
use crate::dispatch::{self, Dispatch};
use crate::level::{Level, registry};
use crate::record::LogRecord;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Route {
    /// Writes through one facade's handler set.
    Bound(Arc<Dispatch>),
    /// Looks up the active dispatch on every call.
    Active,
}

/// Cheap to clone. The name shows up as the logger field of every record.
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
    route: Route,
}

/// Handle that follows whichever configuration is installed at emit time.
#[must_use]
pub fn get_logger(name: &str) -> Logger {
    Logger {
        name: name.to_string(),
        route: Route::Active,
    }
}

impl Logger {
    pub(crate) fn bound(name: &str, dispatch: Arc<Dispatch>) -> Self {
        Self {
            name: name.to_string(),
            route: Route::Bound(dispatch),
        }
    }

    /// Shown as the logger field of every record.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn dispatch(&self) -> Option<Arc<Dispatch>> {
        match &self.route {
            Route::Bound(dispatch) => Some(Arc::clone(dispatch)),
            Route::Active => dispatch::active(),
        }
    }

    /// False when nothing is installed for an unbound handle.
    #[must_use]
    pub fn is_enabled_for(&self, level: &Level) -> bool {
        self.dispatch().is_some_and(|d| d.enabled(level))
    }

    /// Sends a prepared record through the handlers.
    pub fn emit_record(&self, record: &LogRecord) {
        if let Some(dispatch) = self.dispatch() {
            dispatch.dispatch(record);
        }
    }

    /// Starts a record with args, per-call attributes or an explicit callsite.
    #[must_use]
    pub fn event(&self, level: Level) -> Event<'_> {
        Event::new(self, level)
    }

    /// Emits at `level`; the caller's file stem stands in for the function name.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str) {
        self.event(level).emit(msg);
    }

    /// Emits at a level looked up by name, custom levels included.
    /// Returns `false` when no such level is registered.
    #[track_caller]
    pub fn log_named(&self, level: &str, msg: &str) -> bool {
        let Some(level) = registry().resolve(level) else {
            return false;
        };
        self.log(level, msg);
        true
    }

    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.log(Level::DEBUG, msg);
    }

    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.log(Level::INFO, msg);
    }

    #[track_caller]
    pub fn warning(&self, msg: &str) {
        self.log(Level::WARNING, msg);
    }

    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.log(Level::ERROR, msg);
    }

    #[track_caller]
    pub fn critical(&self, msg: &str) {
        self.log(Level::CRITICAL, msg);
    }

    #[track_caller]
    pub fn timer(&self, msg: &str) {
        self.log(Level::TIMER, msg);
    }

    #[track_caller]
    pub fn app_info(&self, msg: &str) {
        self.log(Level::APP_INFO, msg);
    }

    /// # Errors
    /// The first flush failure among the handlers.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.dispatch().map_or(Ok(()), |d| d.flush())
    }
}
