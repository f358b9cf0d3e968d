use super::*;

#[test]
fn default_phase_is_loading() {
    assert_eq!(WeatherPhase::default(), WeatherPhase::Loading);
}

#[test]
fn unsupported_geolocation_message() {
    let phase = WeatherPhase::failed_from_geo(&GeoError::Unsupported);
    assert_eq!(phase, WeatherPhase::Failed(GEO_UNSUPPORTED.to_owned()));
}

#[test]
fn denied_geolocation_uses_fixed_message() {
    let phase = WeatherPhase::failed_from_geo(&GeoError::Denied {
        code: 1,
        message: "User denied Geolocation".to_owned(),
    });
    assert_eq!(
        phase,
        WeatherPhase::Failed("Location access required for local weather".to_owned())
    );
}

#[test]
fn http_failure_message_contains_status() {
    let phase = WeatherPhase::failed_from_fetch(&ApiError::Http {
        status: 500,
        detail: None,
    });
    let WeatherPhase::Failed(message) = phase else {
        panic!("expected Failed");
    };
    assert!(message.contains("500"), "message was: {message}");
    assert!(message.starts_with("Failed to fetch weather data"));
}

#[test]
fn network_failure_message_names_the_error() {
    let phase = WeatherPhase::failed_from_fetch(&ApiError::Network("connection reset".to_owned()));
    let WeatherPhase::Failed(message) = phase else {
        panic!("expected Failed");
    };
    assert!(message.contains("connection reset"));
}

#[test]
fn ready_keeps_snapshot_verbatim() {
    let snap = WeatherSnapshot {
        source: "owm".to_owned(),
        temp: 18.0,
        humidity: 60.0,
        wind_speed: 3.2,
        description: "Clear".to_owned(),
    };
    let phase = WeatherPhase::Ready(snap.clone());
    assert_eq!(phase, WeatherPhase::Ready(snap));
}
