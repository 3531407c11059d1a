//! # Session store — the current user and the login flag
//!
//! [`SessionStore`] is the only thing in the app that touches persisted state.
//! It keeps two keys in a [`KeyValueStore`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`USER_DATA_KEY`] (`"user-data"`) | JSON-serialised [`UserRecord`] |
//! | [`LOGIN_STATUS_KEY`] (`"login-status"`) | `"true"` / `"false"` |
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string-to-string interface with `get` and `put`.
//! Implementations live in sibling modules ([`crate::memory`],
//! `file_store` on native, `local_storage` on the web), so the same session
//! logic works against browser local storage, a directory on disk, or memory.
//!
//! ## Failure model
//!
//! Backends swallow I/O errors: a failed `put` is logged and dropped, a failed
//! `get` reads as absent. A stored record that no longer parses is treated as
//! no record at all. Every write is a full overwrite, so the last writer wins
//! when two tabs share the same origin.

use crate::models::UserRecord;

/// Storage key holding the JSON-encoded [`UserRecord`].
pub const USER_DATA_KEY: &str = "user-data";
/// Storage key holding the login flag.
pub const LOGIN_STATUS_KEY: &str = "login-status";

/// Narrow synchronous key-value interface over persistent client storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: String);
}

/// Reads and writes the single user record and the login flag.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Overwrite the stored user record.
    pub fn write_user(&self, record: &UserRecord) {
        match serde_json::to_string(record) {
            Ok(json) => self.store.put(USER_DATA_KEY, json),
            Err(e) => tracing::warn!("Failed to serialise user record: {}", e),
        }
    }

    /// Overwrite the login flag.
    pub fn set_logged_in(&self, flag: bool) {
        self.store.put(LOGIN_STATUS_KEY, flag.to_string());
    }

    /// The stored user record, or `None` if nothing readable is stored.
    pub fn read_user(&self) -> Option<UserRecord> {
        let raw = self.store.get(USER_DATA_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Stored user record is unreadable: {}", e);
                None
            }
        }
    }

    /// Whether the login flag is set. Absent reads as `false`.
    pub fn read_logged_in(&self) -> bool {
        self.store
            .get(LOGIN_STATUS_KEY)
            .is_some_and(|raw| flag_from_str(&raw))
    }
}

/// Coerce a stored flag value to a boolean.
///
/// Empty, `"false"` and `"0"` are false; anything else is true.
pub fn flag_from_str(raw: &str) -> bool {
    !matches!(raw.trim(), "" | "false" | "0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn record(name: &str) -> UserRecord {
        UserRecord {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            photo: "https://img/1.png".to_string(),
            phone: "555-1234".to_string(),
            password: "Abc!23".to_string(),
        }
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let session = SessionStore::new(MemoryStore::new());
        assert!(session.read_user().is_none());
        assert!(!session.read_logged_in());
    }

    #[test]
    fn test_write_and_read_user() {
        let session = SessionStore::new(MemoryStore::new());
        session.write_user(&record("Ann"));
        assert_eq!(session.read_user(), Some(record("Ann")));
    }

    #[test]
    fn test_write_user_is_idempotent() {
        let store = MemoryStore::new();
        let session = SessionStore::new(store.clone());

        session.write_user(&record("Ann"));
        let once = store.get(USER_DATA_KEY);
        session.write_user(&record("Ann"));

        assert_eq!(store.get(USER_DATA_KEY), once);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_second_write_overwrites_first() {
        let session = SessionStore::new(MemoryStore::new());
        session.write_user(&record("Ann"));
        session.write_user(&record("Bob"));
        assert_eq!(session.read_user(), Some(record("Bob")));
    }

    #[test]
    fn test_login_flag() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_logged_in(true);
        assert!(session.read_logged_in());
        session.set_logged_in(false);
        assert!(!session.read_logged_in());
    }

    #[test]
    fn test_flag_coercion() {
        assert!(flag_from_str("true"));
        assert!(flag_from_str("yes"));
        assert!(!flag_from_str(""));
        assert!(!flag_from_str("false"));
        assert!(!flag_from_str("0"));
    }

    #[test]
    fn test_corrupt_record_reads_as_absent() {
        let store = MemoryStore::new();
        store.put(USER_DATA_KEY, "{not json".to_string());
        let session = SessionStore::new(store);
        assert!(session.read_user().is_none());
    }

    #[test]
    fn test_clones_share_storage() {
        let session = SessionStore::new(MemoryStore::new());
        let other = session.clone();
        session.write_user(&record("Ann"));
        other.set_logged_in(true);
        assert!(session.read_logged_in());
        assert_eq!(other.read_user(), Some(record("Ann")));
    }
}
