//! Registration draft: transient form state, validated locally before
//! submission and discarded afterwards.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::api::ApiError;
use crate::net::types::RegisterRequest;

/// Shown when the two password fields differ; blocks submission before any
/// network call.
pub const PASSWORD_MISMATCH: &str = "Passwords don't match";

/// Fallback when the backend rejects a registration without a `detail`.
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// The five registration form fields. The confirmation field never crosses
/// the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub primary_location: String,
}

impl RegistrationDraft {
    /// Local pre-submit validation: exact string equality of the two
    /// password fields.
    ///
    /// # Errors
    ///
    /// Returns the inline message to display on mismatch.
    pub fn validate(&self) -> Result<(), String> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH.to_owned());
        }
        Ok(())
    }

    /// Wire form of the draft.
    pub fn request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            primary_location: self.primary_location.clone(),
        }
    }
}

/// Message shown for a rejected registration: the server's `detail` when
/// present, otherwise the generic fallback.
pub fn register_failure_message(err: &ApiError) -> String {
    err.server_detail()
        .map_or_else(|| REGISTRATION_FAILED.to_owned(), ToOwned::to_owned)
}
