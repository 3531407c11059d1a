//! Local authentication: the password policy and sign-in against the stored record.

mod local;
mod password;

pub use local::{sign_in, SignInError, SIGNED_IN_NOTICE};
pub use password::{validate_password, PASSWORD_POLICY_MESSAGE};
