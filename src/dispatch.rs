//! The active, process-wide handler set.
//!
//! Installing replaces whatever was active before. Loggers obtained through
//! [`get_logger`](crate::get_logger) look the dispatch up on every call, so
//! they follow re-installs.

use crate::handler::Handler;
use crate::level::Level;
use crate::record::LogRecord;
use std::sync::{Arc, PoisonError, RwLock};

static ACTIVE: RwLock<Option<Arc<Dispatch>>> = RwLock::new(None);

/// Root threshold plus handlers in write order.
#[derive(Debug)]
pub struct Dispatch {
    min_level: Level,
    handlers: Vec<Arc<Handler>>,
}

impl Dispatch {
    /// Handlers are written in the given order.
    #[must_use]
    pub const fn new(min_level: Level, handlers: Vec<Arc<Handler>>) -> Self {
        Self {
            min_level,
            handlers,
        }
    }

    /// Root threshold applied before any handler sees the record.
    #[must_use]
    pub const fn min_level(&self) -> &Level {
        &self.min_level
    }

    /// Write order: file handler first when present.
    #[must_use]
    pub fn handlers(&self) -> &[Arc<Handler>] {
        &self.handlers
    }

    /// Root threshold check, by rank.
    #[must_use]
    pub const fn enabled(&self, level: &Level) -> bool {
        level.at_least(&self.min_level)
    }

    /// Fans the record out to every handler. A failing sink never stops the others.
    pub fn dispatch(&self, record: &LogRecord) {
        if !self.enabled(&record.level) {
            return;
        }
        for handler in &self.handlers {
            let _ = handler.handle(record);
        }
    }

    /// # Errors
    /// The first flush failure.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for handler in &self.handlers {
            handler.flush()?;
        }
        Ok(())
    }
}

/// Makes `dispatch` the active configuration, replacing any prior one.
pub fn install(dispatch: Arc<Dispatch>) {
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = Some(dispatch);
}

/// Currently installed configuration, if any.
#[must_use]
pub fn active() -> Option<Arc<Dispatch>> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Uninstalls the active configuration; later global records are dropped.
pub fn clear() {
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Clears the active configuration only if it is `dispatch`.
pub fn uninstall(dispatch: &Arc<Dispatch>) -> bool {
    let mut active = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    if active
        .as_ref()
        .is_some_and(|current| Arc::ptr_eq(current, dispatch))
    {
        *active = None;
        return true;
    }
    false
}

/// Whether `dispatch` is the installed configuration (pointer identity).
#[must_use]
pub fn is_active(dispatch: &Arc<Dispatch>) -> bool {
    active().is_some_and(|current| Arc::ptr_eq(&current, dispatch))
}
