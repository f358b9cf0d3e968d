use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token_for(payload: &serde_json::Value) -> String {
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).expect("payload"));
    format!("h.{body}.s")
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_starts_loading_without_claims() {
    let state = SessionState::default();
    assert!(state.claims.is_none());
    assert!(state.loading);
}

// =============================================================
// Persisted-token resolution
// =============================================================

#[test]
fn resolve_persisted_missing_token() {
    assert_eq!(resolve_persisted(None), PersistedToken::Missing);
}

#[test]
fn resolve_persisted_valid_token_yields_claims() {
    let payload = serde_json::json!({"user_id": 7, "exp": 2_000_000_000u64});
    let token = token_for(&payload);
    match resolve_persisted(Some(&token)) {
        PersistedToken::Valid(claims) => {
            assert_eq!(claims.subject.as_deref(), Some("7"));
            assert_eq!(claims.expires_at, Some(2_000_000_000));
        }
        other => panic!("expected Valid, got {other:?}"),
    }
}

#[test]
fn resolve_persisted_garbage_is_invalid() {
    assert!(matches!(
        resolve_persisted(Some("not a jwt")),
        PersistedToken::Invalid(TokenError::Malformed)
    ));
}

// =============================================================
// Initialization and logout (native build: storage reads empty)
// =============================================================

#[test]
fn initialize_resolves_loading() {
    let session = SessionContext::new();
    session.initialize();
    let state = session.state().get_untracked();
    assert!(!state.loading);
    assert!(state.claims.is_none());
}

#[test]
fn logout_is_idempotent_when_logged_out() {
    let session = SessionContext::new();
    session.initialize();
    session.logout();
    session.logout();
    assert!(session.state().get_untracked().claims.is_none());
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn login_failure_prefers_server_detail() {
    let err = ApiError::Http {
        status: 401,
        detail: Some("No active account found with the given credentials".to_owned()),
    };
    assert_eq!(
        login_failure_message(&err),
        "No active account found with the given credentials"
    );
}

#[test]
fn login_failure_falls_back_to_generic() {
    let err = ApiError::Http {
        status: 500,
        detail: None,
    };
    assert_eq!(login_failure_message(&err), "Login failed");
    assert_eq!(
        login_failure_message(&ApiError::Network("timed out".to_owned())),
        "Login failed"
    );
}
