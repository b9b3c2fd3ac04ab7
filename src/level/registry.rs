//! Process-wide severity registry.
//!
//! Registration is idempotent: constructing the facade twice (test suites,
//! repeated setup) must not overwrite or duplicate a level.

use super::Level;
use crate::internal;
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Alternate spellings accepted wherever a level name is parsed.
const ALIASES: &[(&str, &str)] = &[("WARN", "WARNING"), ("FATAL", "CRITICAL")];

/// Emit calls every logger already has; a level whose method name collides is rejected.
const RESERVED_METHODS: &[&str] = &["log", "warn", "fatal", "event", "flush"];

static REGISTRY: OnceLock<SeverityRegistry> = OnceLock::new();

/// Outcome of [`SeverityRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered,
    /// The name or its method name was taken; nothing changed.
    AlreadyDefined,
}

/// Name -> level mapping guarded by a single lock.
#[derive(Debug)]
pub struct SeverityRegistry {
    levels: RwLock<HashMap<String, Level>>,
}

impl Default for SeverityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SeverityRegistry {
    /// A registry holding only the standard levels.
    #[must_use]
    pub fn new() -> Self {
        let levels = Level::standard()
            .into_iter()
            .map(|level| (level.name().to_string(), level))
            .collect();
        Self {
            levels: RwLock::new(levels),
        }
    }

    /// Adds `name` at `rank` unless the name (case-insensitive) or its derived
    /// method name is already defined.
    pub fn register(&self, name: &str, rank: u32) -> Registration {
        let level = Level::new(rank, name);
        let method = level.method_name();

        let mut levels = self.levels.write().unwrap_or_else(PoisonError::into_inner);
        let taken = levels.contains_key(level.name())
            || ALIASES.iter().any(|(alias, _)| *alias == level.name())
            || RESERVED_METHODS.contains(&method.as_str())
            || levels.values().any(|existing| existing.method_name() == method);
        if taken {
            drop(levels);
            internal::debug(&format!("{name} already defined in severity registry"));
            return Registration::AlreadyDefined;
        }

        levels.insert(level.name().to_string(), level);
        Registration::Registered
    }

    /// Case-insensitive lookup, aliases included.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Level> {
        let upper = name.trim().to_uppercase();
        let canonical = ALIASES
            .iter()
            .find(|(alias, _)| *alias == upper)
            .map_or(upper.as_str(), |(_, target)| target);

        self.levels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(canonical)
            .cloned()
    }

    /// Rank behind a name or alias, for callers that only need to compare.
    #[must_use]
    pub fn rank_of(&self, name: &str) -> Option<u32> {
        self.resolve(name).map(|level| level.rank())
    }

    /// All registered levels, lowest rank first.
    #[must_use]
    pub fn levels(&self) -> Vec<Level> {
        let mut levels: Vec<Level> = self
            .levels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        levels.sort();
        levels
    }
}

/// The process-wide registry, created with the standard levels on first access.
pub fn registry() -> &'static SeverityRegistry {
    REGISTRY.get_or_init(SeverityRegistry::new)
}

/// Installs `TIMER` and `APP_INFO`. Safe to call any number of times.
pub fn register_custom_levels() {
    for level in [Level::TIMER, Level::APP_INFO] {
        registry().register(level.name(), level.rank());
    }
}
