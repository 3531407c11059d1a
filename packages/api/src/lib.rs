//! # API crate — outbound integrations and the registration core
//!
//! Everything here is UI-agnostic so it can be driven from Dioxus views and
//! exercised from plain `#[tokio::test]`s.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Password policy and sign-in against the locally stored record |
//! | [`config`] | Image host API key and endpoint, read from the environment |
//! | [`registration`] | The upload → validate → persist state machine |
//! | [`upload`] | [`ImageHost`] trait and the imgBB multipart client |

pub mod auth;
pub mod config;
pub mod registration;
pub mod upload;

pub use auth::{sign_in, validate_password, SignInError, PASSWORD_POLICY_MESSAGE};
pub use config::{ConfigError, ImageHostConfig};
pub use registration::{
    Notice, NoticeLevel, Registration, RegistrationError, RegistrationForm, RegistrationOutcome,
    RegistrationState,
};
pub use upload::{ImageFile, ImageHost, ImgbbClient, UploadError};

pub use store::UserRecord;
