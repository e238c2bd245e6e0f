//! # Storage Layer
//!
//! Key-value persistence in the shape of the browser storage the dashboard
//! originally ran against: string keys, one JSON blob per key, whole-value
//! overwrites, last writer wins.
//!
//! Two pieces:
//! - [`StorageBackend`]: raw string get/set/remove. Implementations are
//!   [`fs::FileBackend`] (one `<key>.json` file per key) and
//!   [`memory::MemoryBackend`] (tests, ephemeral runs).
//! - [`StoreAdapter`]: the typed layer everything else talks to. Loads merge
//!   stored partial objects over a caller-supplied default field by field, so
//!   a load never yields a partial record. Malformed stored JSON is treated
//!   as absence, and backend read failures degrade to the default — neither
//!   is ever surfaced as an error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Well-known store keys.
pub mod keys {
    pub const CUSTOMERS: &str = "customers";
    pub const ORDERS: &str = "orders";
    pub const PROFILE: &str = "user_profile";
    pub const ACCOUNT: &str = "user_settings";
    pub const SECURITY: &str = "security_settings";
    pub const COMPANY: &str = "company_data";

    /// Per-route search term, e.g. `search_customers`.
    pub fn search(route: &str) -> String {
        format!("search_{route}")
    }

    /// Per-route filter set, e.g. `filters_customers`.
    pub fn filters(route: &str) -> String {
        format!("filters_{route}")
    }
}

/// Raw string key-value storage.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Typed store with merge-on-load semantics.
pub struct StoreAdapter<S: StorageBackend> {
    backend: S,
}

impl<S: StorageBackend> StoreAdapter<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Raw typed load: `None` when the key is absent, unreadable, or holds
    /// malformed JSON.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "store read failed, treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "malformed stored JSON, treating as absent");
                None
            }
        }
    }

    /// Load a flat record, merging whatever was stored over `default` field
    /// by field. Always yields a complete record.
    pub fn load_record<T>(&self, key: &str, default: &T) -> T
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let stored: serde_json::Value = match self.load(key) {
            Some(value) => value,
            None => return default.clone(),
        };

        let mut base = match serde_json::to_value(default) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "default record not serializable");
                return default.clone();
            }
        };

        match (&mut base, stored) {
            (serde_json::Value::Object(base_map), serde_json::Value::Object(stored_map)) => {
                for (field, value) in stored_map {
                    base_map.insert(field, value);
                }
            }
            _ => return default.clone(),
        }

        serde_json::from_value(base).unwrap_or_else(|e| {
            warn!(key, error = %e, "stored record incompatible, using defaults");
            default.clone()
        })
    }

    /// Overwrite `key` with the serialized value. Synchronous; a backend
    /// failure is logged and reported as a generic store error.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string_pretty(value)?;
        self.backend.set(key, &raw).inspect_err(|e| {
            warn!(key, error = %e, "store write failed");
        })
    }

    /// Best-effort delete; failures are logged and swallowed.
    pub fn remove(&mut self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            warn!(key, error = %e, "store remove failed");
        }
    }
}
