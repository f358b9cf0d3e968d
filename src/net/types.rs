#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Login request body for `POST auth/login/`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Token pair returned by a successful login.
///
/// Both strings are opaque to the client; the access token is decoded for
/// display only, the refresh token is persisted but never consumed (no
/// refresh flow exists).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Registration request body for `POST auth/register/`.
///
/// The password-confirmation field never crosses the wire; it is checked
/// locally before this struct is built.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub primary_location: String,
}

/// Current-weather payload from `GET weather/current/`.
///
/// Stored verbatim in view state, never persisted, never merged with a
/// prior snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeatherSnapshot {
    pub source: String,
    pub temp: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub description: String,
}

/// Failure envelope the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Extract the `detail` message from a raw error body, if parseable.
    pub fn detail_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
    }
}
