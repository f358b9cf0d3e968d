//! REST API client for the Farmcast backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, attaching the
//! persisted access token as a bearer credential when one exists.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! There is no retry, no backoff, and no token refresh. A non-2xx status is
//! surfaced as [`ApiError::Http`] carrying the backend's `detail` message
//! when the error body is parseable; callers decide how to present it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::OnceLock;

use crate::net::types::{Credentials, RegisterRequest, TokenPair, WeatherSnapshot};

#[cfg(feature = "hydrate")]
use crate::net::types::ErrorBody;

/// Base path prepended to every endpoint. Set once per process.
static API_BASE: OnceLock<String> = OnceLock::new();

const DEFAULT_API_BASE: &str = "/api";

/// Error returned by the API client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure before any HTTP status was received,
    /// or an unreadable success body.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status, with the backend's `detail` message when
    /// the error body carried one.
    #[error("HTTP {status}")]
    Http { status: u16, detail: Option<String> },
    /// Browser-only endpoint called during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The server-supplied failure message, if any.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Override the default `/api` base path. Only the first call wins; the
/// base is fixed for the application's lifetime.
pub fn init_base_url(base: &str) {
    let _ = API_BASE.set(base.to_owned());
}

fn base_url() -> &'static str {
    API_BASE.get().map_or(DEFAULT_API_BASE, String::as_str)
}

fn endpoint(path: &str) -> String {
    join_endpoint(base_url(), path)
}

fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Attach the persisted access token as a bearer credential, if present.
#[cfg(feature = "hydrate")]
fn authorize(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::read_access_token() {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Map a non-2xx response to [`ApiError::Http`], salvaging the `detail`
/// message when the error body is JSON.
#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = resp
        .text()
        .await
        .ok()
        .as_deref()
        .and_then(ErrorBody::detail_from);
    ApiError::Http { status, detail }
}

/// Exchange credentials for a token pair via `POST auth/login/`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn login(credentials: &Credentials) -> Result<TokenPair, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::post(&endpoint("auth/login/")))
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        resp.json::<TokenPair>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST auth/register/`. The success body, if any,
/// is ignored.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::post(&endpoint("auth/register/")))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the current weather for a coordinate pair via
/// `GET weather/current/?lat=&lon=`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn fetch_current_weather(lat: f64, lon: f64) -> Result<WeatherSnapshot, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&format!("weather/current/?lat={lat}&lon={lon}"));
        let resp = authorize(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        resp.json::<WeatherSnapshot>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lat, lon);
        Err(ApiError::Unavailable)
    }
}
