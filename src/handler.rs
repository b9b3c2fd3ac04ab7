//! A handler is one sink plus the stages in front of it:
//! level gate -> attribute filters -> formatter -> output.

use crate::filter::AttributeFilter;
use crate::fmt::Formatter;
use crate::level::Level;
use crate::output::Output;
use crate::record::LogRecord;
use std::sync::{PoisonError, RwLock};

pub struct Handler {
    min_level: Level,
    formatter: Box<dyn Formatter>,
    output: Box<dyn Output>,
    /// Searched in attachment order.
    filters: RwLock<Vec<AttributeFilter>>,
}

impl Handler {
    /// Formatter and output are fixed for the handler's lifetime; filters can be added later.
    #[must_use]
    pub fn new(
        min_level: Level,
        formatter: impl Formatter + 'static,
        output: impl Output + 'static,
    ) -> Self {
        Self::boxed(min_level, Box::new(formatter), Box::new(output))
    }

    /// For when the formatter or output is picked at runtime.
    #[must_use]
    pub fn boxed(
        min_level: Level,
        formatter: Box<dyn Formatter>,
        output: Box<dyn Output>,
    ) -> Self {
        Self {
            min_level,
            formatter,
            output,
            filters: RwLock::new(Vec::new()),
        }
    }

    /// Lowest level this handler writes; the file handler pins it at WARNING.
    #[must_use]
    pub const fn min_level(&self) -> &Level {
        &self.min_level
    }

    /// Gate on rank alone; a custom level sharing the threshold's rank passes.
    #[must_use]
    pub const fn accepts(&self, level: &Level) -> bool {
        level.at_least(&self.min_level)
    }

    /// Appended after the existing filters, so it is searched last.
    pub fn add_filter(&self, filter: AttributeFilter) {
        self.filters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(filter);
    }

    /// First attached filter that declares `name`.
    #[must_use]
    pub fn find_filter(&self, name: &str) -> Option<AttributeFilter> {
        self.filters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|filter| filter.declares(name))
            .cloned()
    }

    /// Clones of the attached filters; they still share state with the originals.
    #[must_use]
    pub fn filters(&self) -> Vec<AttributeFilter> {
        self.filters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Renders the record exactly as `handle` would write it, or `None` below the threshold.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> Option<String> {
        if !self.accepts(&record.level) {
            return None;
        }

        let filters = self.filters.read().unwrap_or_else(PoisonError::into_inner);
        if filters.is_empty() {
            return Some(self.formatter.format(record));
        }

        let mut record = record.clone();
        for filter in filters.iter() {
            filter.apply(&mut record);
        }
        Some(self.formatter.format(&record))
    }

    /// # Errors
    /// Write failure from the output.
    pub fn handle(&self, record: &LogRecord) -> Result<(), crate::Error> {
        match self.render(record) {
            Some(line) => self.output.write(&record.level, &line),
            None => Ok(()),
        }
    }

    /// # Errors
    /// Flush failure from the output.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.output.flush()
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("min_level", &self.min_level)
            .field("filters", &self.filters().len())
            .finish_non_exhaustive()
    }
}
