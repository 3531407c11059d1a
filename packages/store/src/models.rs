//! # Domain model for the registered user
//!
//! [`UserRecord`] is the single profile object kept in client storage. There is
//! no identifier and no collection: a new registration replaces whatever was
//! stored before.
//!
//! The JSON shape is the one written under [`crate::USER_DATA_KEY`]:
//!
//! ```json
//! {"name":"Ann","email":"ann@x.com","photo":"https://img/1.png","phone":"555-1234","password":"Abc!23"}
//! ```
//!
//! Every field is `#[serde(default)]` so a record with missing keys still loads
//! and renders those fields blank.

use serde::{Deserialize, Serialize};

/// The current user's profile as persisted in client storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    /// Display URL returned by the image host, never typed by the user.
    pub photo: String,
    pub phone: String,
    /// Stored in plain text. This store is not an auth system.
    pub password: String,
}

impl UserRecord {
    /// Whether `email` and `password` match this record exactly.
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
