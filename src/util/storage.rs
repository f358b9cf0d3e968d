//! Persisted token storage.
//!
//! The two credential strings live in `localStorage` under fixed keys and
//! are mutated only by the session store. The invariant is both-or-neither:
//! writes store both tokens, clears remove both. Requires a browser
//! environment; the SSR stubs read as empty and write as no-ops.

use crate::net::types::TokenPair;

/// Storage key for the access token.
pub const ACCESS_KEY: &str = "access";
/// Storage key for the refresh token.
pub const REFRESH_KEY: &str = "refresh";

/// Read the persisted access token, if any.
pub fn read_access_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(ACCESS_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist both tokens of a pair.
pub fn store_tokens(pair: &TokenPair) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(ACCESS_KEY, &pair.access);
            let _ = storage.set_item(REFRESH_KEY, &pair.refresh);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pair;
    }
}

/// Remove both tokens. Safe to call when nothing is stored.
pub fn clear_tokens() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(ACCESS_KEY);
            let _ = storage.remove_item(REFRESH_KEY);
        }
    }
}
