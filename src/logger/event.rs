//! Per-call record builder: positional args, dynamic attributes, callsite.

use super::Logger;
use crate::level::Level;
use crate::record::{Callsite, LogRecord};
use std::collections::HashMap;

#[must_use = "an event does nothing until `emit` is called"]
pub struct Event<'a> {
    logger: &'a Logger,
    level: Level,
    callsite: Option<Callsite>,
    args: Vec<String>,
    attributes: HashMap<String, String>,
}

impl<'a> Event<'a> {
    pub(crate) fn new(logger: &'a Logger, level: Level) -> Self {
        Self {
            logger,
            level,
            callsite: None,
            args: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Fills the next `{}` in the message.
    pub fn arg(mut self, value: impl ToString) -> Self {
        self.args.push(value.to_string());
        self
    }

    /// Fills the next placeholders in order.
    pub fn args<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.args.extend(values.into_iter().map(|v| v.to_string()));
        self
    }

    /// Dynamic attribute for this record only. Filters overwrite it if they
    /// declare the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Overrides the captured location; the emit macros pass the real function name.
    pub fn callsite(mut self, callsite: Callsite) -> Self {
        self.callsite = Some(callsite);
        self
    }

    #[track_caller]
    pub fn emit(self, msg: impl Into<String>) {
        if !self.logger.is_enabled_for(&self.level) {
            return;
        }
        let callsite = match self.callsite {
            Some(callsite) => callsite,
            None => Callsite::caller(),
        };
        let mut record = LogRecord::new(self.level, self.logger.name(), callsite, msg)
            .with_args(self.args);
        record.attributes = self.attributes;
        self.logger.emit_record(&record);
    }
}
