//! Weather dashboard state machine: `loading → ready | failed`.
//!
//! Every failure is terminal for the current view until the user retries;
//! a retry resets to `Loading` and reruns the full geolocate-then-fetch
//! sequence. Nothing is cached across retries.

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use crate::net::api::ApiError;
use crate::net::types::WeatherSnapshot;
use crate::util::geo::GeoError;

/// Shown when the runtime exposes no geolocation object.
pub const GEO_UNSUPPORTED: &str = "Geolocation is not supported by your browser";

/// Shown when the position lookup fails (permission denied, unavailable,
/// or timed out).
pub const GEO_DENIED: &str = "Location access required for local weather";

/// Phase of the dashboard view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WeatherPhase {
    /// Geolocation or the weather fetch is in flight.
    #[default]
    Loading,
    /// Snapshot fetched and stored verbatim.
    Ready(WeatherSnapshot),
    /// Human-readable failure; terminal until a manual retry.
    Failed(String),
}

impl WeatherPhase {
    /// Failure phase for a geolocation error.
    pub fn failed_from_geo(err: &GeoError) -> Self {
        match err {
            GeoError::Unsupported => Self::Failed(GEO_UNSUPPORTED.to_owned()),
            GeoError::Denied { .. } => Self::Failed(GEO_DENIED.to_owned()),
        }
    }

    /// Failure phase for a weather-fetch error. HTTP failures keep the
    /// status visible in the message.
    pub fn failed_from_fetch(err: &ApiError) -> Self {
        Self::Failed(format!("Failed to fetch weather data ({err})"))
    }
}
