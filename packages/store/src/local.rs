//! # Browser `localStorage` key-value store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the web platform. It looks up
//! `window.localStorage` on every call instead of holding a handle, so it is a
//! zero-size `Copy` value that can be captured freely by event handlers.
//!
//! Storage can be unavailable (private browsing, disabled cookies). In that case
//! reads return `None` and writes are dropped, which leaves the user signed out
//! rather than breaking the page.

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, not saving {}", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to write {} to localStorage", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
