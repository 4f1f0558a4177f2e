// SPDX-License-Identifier: MPL-2.0
//! Persisted key-value preference storage.
//!
//! This module defines the [`PreferenceStore`] trait that the locale
//! resolver depends on. The resolver never touches a concrete platform
//! store directly; callers inject [`FileStore`] in production and
//! [`MemoryStore`] in tests.
//!
//! A store is a flat mapping of string keys to string values. `set` only
//! stages a value; nothing is durable until `commit` returns `Ok`.
//! Concurrent writers rely on whatever atomicity the backing store
//! provides - no additional locking happens at this layer.

use crate::error::Result;
use std::collections::BTreeMap;

pub mod file;

pub use file::FileStore;

/// Durable, process-wide string preference storage.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Option<String>;

    /// Stages `value` under `key`. Not durable until [`commit`](Self::commit).
    fn set(&mut self, key: &str, value: &str);

    /// Flushes staged values to the backing store.
    fn commit(&mut self) -> Result<()>;
}

/// In-memory store for tests and ephemeral use.
///
/// Supports injecting a commit failure to exercise the error path:
///
/// ```
/// use locale_bridge::store::{MemoryStore, PreferenceStore};
///
/// let mut store = MemoryStore::failing();
/// store.set("locale_override", "fr-CA");
/// assert!(store.commit().is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
    fail_commits: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every commit fails with [`Error::Store`](crate::Error).
    pub fn failing() -> Self {
        Self {
            values: BTreeMap::new(),
            fail_commits: true,
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn commit(&mut self) -> Result<()> {
        if self.fail_commits {
            return Err(crate::Error::Store(
                "simulated commit failure".to_string(),
            ));
        }
        Ok(())
    }
}
