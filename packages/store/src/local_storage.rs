//! # Browser local storage — web persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It writes straight into `window.localStorage` for the current origin, so
//! the session outlives page reloads and is shared by every tab.
//!
//! ## Error handling
//!
//! Storage can be missing (privacy modes, sandboxed iframes) or full. Reads
//! then return `None` and writes are logged and dropped; the UI degrades to
//! "not logged in" rather than failing.

use web_sys::Storage;

use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
///
/// Zero-sized: the storage handle is looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn put(&self, key: &str, value: String) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("Local storage unavailable, dropping write to {}", key);
            return;
        };
        if let Err(e) = storage.set_item(key, &value) {
            tracing::warn!("Failed to write {} to local storage: {:?}", key, e);
        }
    }
}
