//! Severity levels that gate which records reach which handlers.
//!
//! A level is a name plus a numeric rank. The five standard levels are
//! constants; custom levels (`TIMER`, `APP_INFO`, or anything a caller adds)
//! live in the process-wide [`registry`].

mod registry;

pub use registry::{Registration, SeverityRegistry, register_custom_levels, registry};

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Named, ranked severity. Ordering is by rank, then name, so level lists sort
/// deterministically; threshold checks go through [`Level::at_least`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Level {
    rank: u32,
    name: Cow<'static, str>,
}

impl Level {
    pub const DEBUG: Self = Self::builtin(10, "DEBUG");
    pub const INFO: Self = Self::builtin(20, "INFO");
    pub const WARNING: Self = Self::builtin(30, "WARNING");
    pub const ERROR: Self = Self::builtin(40, "ERROR");
    pub const CRITICAL: Self = Self::builtin(50, "CRITICAL");
    /// Elapsed-time reports; ranked above `CRITICAL` so they survive any threshold.
    pub const TIMER: Self = Self::builtin(55, "TIMER");
    /// Application lifecycle notices, one step above `TIMER`.
    pub const APP_INFO: Self = Self::builtin(56, "APP_INFO");

    const fn builtin(rank: u32, name: &'static str) -> Self {
        Self {
            rank,
            name: Cow::Borrowed(name),
        }
    }

    /// Custom severity. The name is stored uppercased, the way level names are rendered.
    #[must_use]
    pub fn new(rank: u32, name: &str) -> Self {
        Self {
            rank,
            name: Cow::Owned(name.to_uppercase()),
        }
    }

    /// Numeric severity; the only thing thresholds compare.
    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    /// Whether a record at this level passes a `threshold` gate. Names are
    /// ignored, so `NOTICE` registered at 30 passes a WARNING threshold.
    #[must_use]
    pub const fn at_least(&self, threshold: &Self) -> bool {
        self.rank >= threshold.rank
    }

    /// Uppercase name, as rendered in the level tag and `log.level`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the emit call a level installs (`TIMER` -> `timer`).
    #[must_use]
    pub fn method_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// The levels every registry starts with, lowest first.
    #[must_use]
    pub const fn standard() -> [Self; 5] {
        [
            Self::DEBUG,
            Self::INFO,
            Self::WARNING,
            Self::ERROR,
            Self::CRITICAL,
        ]
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::WARNING
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

/// Resolves against the global registry, so custom levels parse once registered.
impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        registry()
            .resolve(s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}
