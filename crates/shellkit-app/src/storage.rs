//! Key/value persistence for panel flags and the layout snapshot
//!
//! Two stores implement [`KeyValueStore`]:
//! - [`MemoryStore`] - process-local, used by tests and `--no-persist`
//! - [`FileStore`] - a single JSON file under the platform data directory,
//!   written atomically (temp file + rename) under an advisory lock
//!
//! Entries may carry an expiry; expired entries read as absent.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use shellkit_core::prelude::*;

/// Flag name for the persisted sidebar open state
pub const SIDEBAR_COOKIE_NAME: &str = "sidebar_state";

/// Flag name for the persisted settings panel open state
pub const SETTINGS_PANEL_COOKIE_NAME: &str = "settings_panel_state";

/// Lifetime of persisted panel flags (7 days)
pub const COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

/// Environment override for the storage directory
pub const DATA_DIR_ENV: &str = "SHELLKIT_DATA_DIR";

const STORAGE_FILENAME: &str = "storage.json";

/// A string key/value store with optional per-entry expiry.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read a value. Expired entries are `None`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, optionally expiring at `expires_at`.
    fn set(&mut self, key: &str, value: &str, expires_at: Option<DateTime<Utc>>) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

impl std::fmt::Debug for dyn KeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KeyValueStore")
    }
}

/// Store handle shared by the panel stores and the layout store.
/// The shell is single-threaded so `Rc<RefCell<_>>` suffices.
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

/// Wrap a store for sharing
pub fn shared<S: KeyValueStore + 'static>(store: S) -> SharedStore {
    Rc::new(RefCell::new(store))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Entry {
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |at| at > now)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MemoryStore
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Utc::now();
        Ok(self
            .entries
            .get(key)
            .filter(|e| e.is_live(now))
            .map(|e| e.value.clone()))
    }

    fn set(&mut self, key: &str, value: &str, expires_at: Option<DateTime<Utc>>) -> Result<()> {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FileStore
// ─────────────────────────────────────────────────────────────────────────────

/// JSON-file backed store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl FileStore {
    /// Open (creating the directory if needed) the store in `dir`.
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::storage(format!("Failed to create {}: {}", dir.display(), e)))?;
        Ok(Self {
            path: dir.join(STORAGE_FILENAME),
            lock_path: dir.join(format!("{STORAGE_FILENAME}.lock")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self, exclusive: bool) -> Result<File> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)?;
        if exclusive {
            FileExt::lock_exclusive(&file)?;
        } else {
            FileExt::lock_shared(&file)?;
        }
        Ok(file)
    }

    fn read_entries(&self) -> Result<HashMap<String, Entry>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| Error::storage_corrupt(self.path.display().to_string(), e.to_string()))
    }

    fn write_entries(&self, entries: &HashMap<String, Entry>) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(entries)?;

        std::fs::write(&temp_path, content)
            .map_err(|e| Error::storage(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::storage(format!("Failed to rename temp file: {}", e)))?;
        Ok(())
    }

    /// Read-modify-write under the exclusive lock. A corrupt file is replaced.
    fn modify(&self, f: impl FnOnce(&mut HashMap<String, Entry>)) -> Result<()> {
        let lock = self.lock(true)?;
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            warn!("Discarding unreadable storage file: {}", e);
            HashMap::new()
        });
        let now = Utc::now();
        entries.retain(|_, e| e.is_live(now));
        f(&mut entries);
        let result = self.write_entries(&entries);
        if let Err(e) = FileExt::unlock(&lock) {
            debug!("Failed to release storage lock: {}", e);
        }
        result
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let lock = self.lock(false)?;
        let entries = self.read_entries();
        if let Err(e) = FileExt::unlock(&lock) {
            debug!("Failed to release storage lock: {}", e);
        }
        let now = Utc::now();
        Ok(entries?
            .get(key)
            .filter(|e| e.is_live(now))
            .map(|e| e.value.clone()))
    }

    fn set(&mut self, key: &str, value: &str, expires_at: Option<DateTime<Utc>>) -> Result<()> {
        self.modify(|entries| {
            entries.insert(
                key.to_string(),
                Entry {
                    value: value.to_string(),
                    expires_at,
                },
            );
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}

/// Resolve the storage directory.
///
/// Priority: `SHELLKIT_DATA_DIR` > configured directory > `<data_local_dir>/shellkit`
pub fn resolve_data_dir(configured: Option<&Path>) -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shellkit")
}

// ─────────────────────────────────────────────────────────────────────────────
// Flags
// ─────────────────────────────────────────────────────────────────────────────

/// Persist a boolean flag for [`COOKIE_MAX_AGE_SECS`]. Failures are logged.
pub fn write_flag(store: &SharedStore, name: &str, value: bool) {
    let expires_at = Utc::now() + Duration::seconds(COOKIE_MAX_AGE_SECS);
    let text = if value { "true" } else { "false" };
    if let Err(e) = store.borrow_mut().set(name, text, Some(expires_at)) {
        warn!("Failed to persist {}={}: {}", name, text, e);
    }
}

/// Read a boolean flag. Missing, expired or malformed flags are `None`.
pub fn read_flag(store: &SharedStore, name: &str) -> Option<bool> {
    match store.borrow().get(name) {
        Ok(Some(v)) => match v.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            other => {
                debug!("Ignoring malformed flag {}={:?}", name, other);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!("Failed to read flag {}: {}", name, e);
            None
        }
    }
}
