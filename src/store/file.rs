// SPDX-License-Identifier: MPL-2.0
//! TOML-backed preference store.
//!
//! Values live in a single named file (`preferences.toml` by default) as a
//! flat string table. The whole table is read once on open and rewritten on
//! every commit; with two keys in practice, that is the cheapest durable
//! option and matches how the rest of the platform persists settings.

use crate::error::Result;
use crate::paths;
use crate::store::PreferenceStore;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default store name, used by [`FileStore::open_default`].
pub const DEFAULT_STORE_NAME: &str = "preferences";

/// On-disk shape: a flat `key = "value"` TOML table.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct StoreFile(BTreeMap<String, String>);

/// A [`PreferenceStore`] persisted as a TOML file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, loading any existing values.
    ///
    /// A missing file yields an empty store (it is created on first commit).
    /// An unreadable or invalid file also yields an empty store rather than
    /// an error, so a corrupted preference file can never wedge startup; the
    /// stale content is overwritten on the next commit.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path);
        Self { path, values }
    }

    /// Opens the default-named store in the platform config directory.
    ///
    /// Fails only when the platform config directory cannot be determined.
    pub fn open_default() -> Result<Self> {
        let dir = paths::config_dir().ok_or_else(|| {
            Error::Store("platform config directory unavailable".to_string())
        })?;
        Ok(Self::open(dir.join(format!("{DEFAULT_STORE_NAME}.toml"))))
    }

    /// The file this store commits to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load_values(path: &Path) -> BTreeMap<String, String> {
    if !path.exists() {
        return BTreeMap::new();
    }
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<StoreFile>(&content) {
            Ok(file) => file.0,
            Err(error) => {
                warn!("ignoring invalid preference file {}: {error}", path.display());
                BTreeMap::new()
            }
        },
        Err(error) => {
            warn!("failed to read preference file {}: {error}", path.display());
            BTreeMap::new()
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn commit(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&StoreFile(self.values.clone()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let store = FileStore::open(dir.path().join("preferences.toml"));
        assert_eq!(store.get("locale_override"), None);
    }

    #[test]
    fn commit_and_reopen_round_trips() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("preferences.toml");

        let mut store = FileStore::open(&path);
        store.set("locale_override", "fr-CA");
        store.set("region_override", "JP");
        store.commit().expect("failed to commit store");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("locale_override"), Some("fr-CA".to_string()));
        assert_eq!(reopened.get("region_override"), Some("JP".to_string()));
    }

    #[test]
    fn commit_creates_parent_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("deep").join("path").join("preferences.toml");

        let mut store = FileStore::open(&path);
        store.set("region_override", "GB");
        store.commit().expect("commit should create directories");

        assert!(path.exists());
    }

    #[test]
    fn invalid_toml_opens_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        let store = FileStore::open(&path);
        assert_eq!(store.get("locale_override"), None);
    }

    #[test]
    fn commit_overwrites_invalid_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        let mut store = FileStore::open(&path);
        store.set("locale_override", "de-DE");
        store.commit().expect("failed to commit store");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("locale_override"), Some("de-DE".to_string()));
    }
}
