//! Persisted client session state behind an injected storage interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth token and league selection live in `localStorage` and must
//! survive reloads. Pages never touch raw keys: they go through
//! [`SessionStore`], which owns the key constants, the legacy-key fallback,
//! and the JSON encoding of driver selections.
//!
//! DESIGN
//! ======
//! The store is a thin typed layer over a [`StorageBackend`] object. The
//! browser backend no-ops on the server so SSR output stays deterministic;
//! the in-memory backend gives tests real read-your-writes behavior without
//! a DOM. Empty stored values count as absent everywhere, matching how the
//! original keys were written by older clients.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const LEGACY_TOKEN_KEY: &str = "token";
pub const LAST_LEAGUE_KEY: &str = "lastLeagueId";
pub const SELECTED_LEAGUE_KEY: &str = "selectedLeagueId";

/// Raw key/value storage behind [`SessionStore`].
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed storage. Every access goes through the live window
/// handle; on the server, or with storage blocked, reads are absent and
/// writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory backend with read-your-writes semantics, used by tests and any
/// headless embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Typed accessors over the persisted session keys.
///
/// Cheap to clone; the app root provides one through context so every page
/// reads the same storage.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Current auth token: `auth_token` first, then the legacy `token` key
    /// written by account registration and older clients.
    pub fn auth_token(&self) -> Option<String> {
        self.read(AUTH_TOKEN_KEY)
            .or_else(|| self.read(LEGACY_TOKEN_KEY))
    }

    pub fn set_auth_token(&self, token: &str) {
        self.backend.set(AUTH_TOKEN_KEY, token);
    }

    /// Store a token under the legacy `token` key.
    pub fn set_legacy_token(&self, token: &str) {
        self.backend.set(LEGACY_TOKEN_KEY, token);
    }

    /// Drop both token keys. League selection is left in place so the
    /// last-opened badge survives the next login.
    pub fn clear_tokens(&self) {
        self.backend.remove(AUTH_TOKEN_KEY);
        self.backend.remove(LEGACY_TOKEN_KEY);
    }

    /// League promoted to the front of the dashboard list.
    pub fn last_league_id(&self) -> Option<String> {
        self.read(LAST_LEAGUE_KEY)
    }

    /// League the detail and driver pages operate on.
    pub fn selected_league_id(&self) -> Option<String> {
        self.read(SELECTED_LEAGUE_KEY)
    }

    /// Record `league_id` as both the active selection and the most recently
    /// opened league.
    pub fn select_league(&self, league_id: &str) {
        self.backend.set(LAST_LEAGUE_KEY, league_id);
        self.backend.set(SELECTED_LEAGUE_KEY, league_id);
    }

    /// Selected driver ids for `league_id`. Invalid JSON, a non-array value,
    /// and non-string elements all read as not selected.
    pub fn driver_selection(&self, league_id: &str) -> Vec<String> {
        let Some(raw) = self.read(&driver_selection_key(league_id)) else {
            return Vec::new();
        };
        let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&raw) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect()
    }

    pub fn set_driver_selection(&self, league_id: &str, ids: &[String]) {
        if let Ok(raw) = serde_json::to_string(ids) {
            self.backend.set(&driver_selection_key(league_id), &raw);
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.backend.get(key).filter(|value| !value.is_empty())
    }
}

fn driver_selection_key(league_id: &str) -> String {
    format!("selectedDrivers:{league_id}")
}
