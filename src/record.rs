//! The snapshot every handler receives for one log call.

use crate::level::Level;
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::collections::HashMap;
use std::panic::Location;
use std::path::Path;

/// Where a record was emitted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callsite {
    pub function: String,
    pub line: u32,
}

impl Callsite {
    #[must_use]
    pub fn new(function: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            line,
        }
    }

    /// Location of the `#[track_caller]` chain's origin. Rust exposes no function
    /// name here, so the source file stem stands in for it.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let location = Location::caller();
        let function = Path::new(location.file())
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("<unknown>");
        Self::new(function, location.line())
    }

    /// Builds a callsite from the `type_name` of a nested marker fn, as the emit
    /// macros do: `app::handlers::checkout::{{closure}}::f` -> `checkout`.
    #[doc(hidden)]
    #[must_use]
    pub fn from_type_name(type_name: &str, line: u32) -> Self {
        let mut path = type_name.strip_suffix("::f").unwrap_or(type_name);
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        let function = path.rsplit("::").next().unwrap_or(path);
        Self::new(function, line)
    }
}

/// Created per call, formatted by each handler, then dropped.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    /// Name of the emitting logger (`root` unless a named logger was used).
    pub logger: String,
    pub function: String,
    pub line: u32,
    /// Raw message; `{}` placeholders are filled from `args` on render.
    pub message: String,
    pub args: Vec<String>,
    /// Dynamic attributes: per-call extras plus whatever filters inject.
    pub attributes: HashMap<String, String>,
}

impl LogRecord {
    /// Stamps the current time; args and attributes start empty.
    #[must_use]
    pub fn new(level: Level, logger: &str, callsite: Callsite, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            logger: logger.to_string(),
            function: callsite.function,
            line: callsite.line,
            message: message.into(),
            args: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Positional values for the `{}` placeholders.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// The message with positional args substituted in order. Surplus args are
    /// ignored and unmatched placeholders are left as-is.
    #[must_use]
    pub fn rendered_message(&self) -> Cow<'_, str> {
        if self.args.is_empty() {
            return Cow::Borrowed(&self.message);
        }

        let mut out = String::with_capacity(self.message.len());
        let mut args = self.args.iter();
        let mut rest = self.message.as_str();
        while let Some(pos) = rest.find("{}") {
            out.push_str(&rest[..pos]);
            match args.next() {
                Some(arg) => out.push_str(arg),
                None => out.push_str("{}"),
            }
            rest = &rest[pos + 2..];
        }
        out.push_str(rest);
        Cow::Owned(out)
    }

    /// Missing attributes read as the empty string.
    #[must_use]
    pub fn attribute(&self, name: &str) -> &str {
        self.attributes.get(name).map_or("", String::as_str)
    }
}
