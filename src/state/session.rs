//! Session store: the decoded identity of the current user, derived from
//! the persisted access token.
//!
//! LIFECYCLE
//! =========
//! A session is created on successful login, or at startup when a persisted
//! token decodes cleanly. It is destroyed by logout or by a decode failure,
//! which also clears both persisted tokens. Decode failures downgrade to
//! the logged-out state; they never propagate.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::Credentials;
use crate::util::jwt::{self, SessionClaims, TokenError};
use crate::util::storage;

/// Session state read by the route guard and the views.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Claims of the active session, if any.
    pub claims: Option<SessionClaims>,
    /// True until [`SessionContext::initialize`] has resolved the persisted
    /// token. The route guard renders nothing while this holds.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            claims: None,
            loading: true,
        }
    }
}

/// Outcome of inspecting the persisted access token at startup.
#[derive(Clone, Debug, PartialEq)]
pub enum PersistedToken {
    Missing,
    Valid(SessionClaims),
    Invalid(TokenError),
}

/// Classify a persisted access token without touching storage.
pub fn resolve_persisted(token: Option<&str>) -> PersistedToken {
    match token {
        None => PersistedToken::Missing,
        Some(token) => match jwt::decode_claims(token) {
            Ok(claims) => PersistedToken::Valid(claims),
            Err(err) => PersistedToken::Invalid(err),
        },
    }
}

/// Message shown for a failed login: the server's `detail` when present,
/// otherwise the generic fallback.
pub fn login_failure_message(err: &ApiError) -> String {
    err.server_detail()
        .map_or_else(|| "Login failed".to_owned(), ToOwned::to_owned)
}

/// Handle to the shared session state, provided via context at the app
/// root. The sole mutator of both the state signal and persisted tokens.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// The underlying state signal, for views that react to session changes.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Resolve the persisted token into a session. Runs exactly once per
    /// application load; always ends with `loading = false`.
    pub fn initialize(&self) {
        let claims = match resolve_persisted(storage::read_access_token().as_deref()) {
            PersistedToken::Missing => None,
            PersistedToken::Valid(claims) => Some(claims),
            PersistedToken::Invalid(err) => {
                leptos::logging::warn!("Invalid persisted token: {err}");
                storage::clear_tokens();
                None
            }
        };
        self.state.update(|s| {
            s.claims = claims;
            s.loading = false;
        });
    }

    /// Exchange credentials for a session.
    ///
    /// On success both tokens are persisted and the decoded claims become
    /// the active session. A pair whose access token does not decode counts
    /// as a failed login; nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns the display message for the failure; prior session state and
    /// storage are left untouched.
    pub async fn login(&self, username: String, password: String) -> Result<(), String> {
        let credentials = Credentials { username, password };
        let pair = api::login(&credentials).await.map_err(|err| {
            leptos::logging::warn!("Login failed: {err}");
            login_failure_message(&err)
        })?;
        let claims = jwt::decode_claims(&pair.access).map_err(|err| {
            leptos::logging::warn!("Login returned an undecodable access token: {err}");
            "Login failed".to_owned()
        })?;
        storage::store_tokens(&pair);
        self.state.update(|s| s.claims = Some(claims));
        Ok(())
    }

    /// Drop the session and both persisted tokens. Purely local, no network
    /// call, idempotent.
    pub fn logout(&self) {
        storage::clear_tokens();
        self.state.update(|s| s.claims = None);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
