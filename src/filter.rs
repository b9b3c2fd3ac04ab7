//! Attribute injection ahead of formatting.
//!
//! An [`AttributeFilter`] is a cheap handle over a shared, lock-guarded map.
//! The facade attaches the same handle to the console and file handlers, so an
//! update through either is seen by both.

use crate::record::LogRecord;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone, Default)]
pub struct AttributeFilter {
    attributes: Arc<RwLock<BTreeMap<String, String>>>,
}

impl AttributeFilter {
    /// A fresh shared map holding `attributes`.
    #[must_use]
    pub fn new<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            attributes: Arc::new(RwLock::new(map)),
        }
    }

    /// Writes every attribute onto the record, replacing per-call values of the same name.
    pub fn apply(&self, record: &mut LogRecord) {
        let attributes = self
            .attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for (name, value) in attributes.iter() {
            record.attributes.insert(name.clone(), value.clone());
        }
    }

    /// Whether this filter owns attribute `name`; `update_filter` searches by this.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Current value, as the next record would see it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// In-place update; every handler holding this filter sees it on the next record.
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value.into());
    }

    /// Copy of every attribute, sorted by name.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// True when both handles share one map.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.attributes, &other.attributes)
    }
}
