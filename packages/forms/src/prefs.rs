//! # Preference storage — the `rememberMe` flag
//!
//! The only durable state these forms write is a single string flag after a
//! successful opted-in login. [`PreferenceStore`] abstracts where it goes:
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`MemoryPrefs`] | native / tests | `HashMap` behind a mutex |
//! | [`LocalStoragePrefs`] | wasm + `web` feature | `window.localStorage` |
//!
//! The forms core only writes; reading the flag back on later visits is the
//! host application's concern.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::PreferenceError;

pub const REMEMBER_ME_KEY: &str = "rememberMe";
pub const REMEMBER_ME_VALUE: &str = "true";

pub trait PreferenceStore {
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory store for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryPrefs {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.lock().map_err(|e| PreferenceError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`-backed store.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePrefs;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl PreferenceStore for LocalStoragePrefs {
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(PreferenceError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| PreferenceError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_prefs_shares_state_across_clones() {
        let prefs = MemoryPrefs::new();
        let clone = prefs.clone();
        clone.set(REMEMBER_ME_KEY, REMEMBER_ME_VALUE).unwrap();
        assert_eq!(prefs.get(REMEMBER_ME_KEY).as_deref(), Some("true"));
        assert_eq!(prefs.get("theme"), None);
    }
}
