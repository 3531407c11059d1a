//! Sign-in against the locally stored user record.
//!
//! There is no server: signing in means the typed email and password equal
//! the ones saved by the last registration. On a match the login flag is set.
//! Every rejection shows the same message.

use store::{KeyValueStore, SessionStore, UserRecord};

pub const SIGNED_IN_NOTICE: &str = "Logged in successfully!";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignInError {
    #[error("Email or password doesn't match")]
    NoAccount,
    #[error("Email or password doesn't match")]
    Mismatch,
}

/// Compare credentials with the stored record and set the login flag on success.
pub fn sign_in<S: KeyValueStore>(
    session: &SessionStore<S>,
    email: &str,
    password: &str,
) -> Result<UserRecord, SignInError> {
    let record = session.read_user().ok_or(SignInError::NoAccount)?;
    if !record.matches_credentials(email.trim(), password) {
        tracing::debug!("Sign-in rejected: credentials do not match");
        return Err(SignInError::Mismatch);
    }
    session.set_logged_in(true);
    Ok(record)
}
