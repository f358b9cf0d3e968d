use super::*;

#[test]
fn weather_snapshot_deserializes_all_fields() {
    let body = r#"{"source":"owm","temp":18,"humidity":60,"wind_speed":3.2,"description":"Clear"}"#;
    let snap: WeatherSnapshot = serde_json::from_str(body).expect("snapshot");
    assert_eq!(snap.source, "owm");
    assert!((snap.temp - 18.0).abs() < f64::EPSILON);
    assert!((snap.humidity - 60.0).abs() < f64::EPSILON);
    assert!((snap.wind_speed - 3.2).abs() < f64::EPSILON);
    assert_eq!(snap.description, "Clear");
}

#[test]
fn register_request_omits_confirmation() {
    let req = RegisterRequest {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "hunter2".to_owned(),
        primary_location: "London".to_owned(),
    };
    let json = serde_json::to_value(&req).expect("serialize");
    let obj = json.as_object().expect("object");
    assert_eq!(obj.len(), 4);
    assert!(!obj.contains_key("confirm_password"));
}

#[test]
fn error_body_detail_extracted() {
    assert_eq!(
        ErrorBody::detail_from(r#"{"detail":"No active account found"}"#),
        Some("No active account found".to_owned())
    );
}

#[test]
fn error_body_detail_absent_or_unparseable() {
    assert_eq!(ErrorBody::detail_from(r#"{"error":"nope"}"#), None);
    assert_eq!(ErrorBody::detail_from("<html>502</html>"), None);
    assert_eq!(ErrorBody::detail_from(""), None);
}

#[test]
fn token_pair_round_trips() {
    let pair: TokenPair =
        serde_json::from_str(r#"{"access":"a.b.c","refresh":"d.e.f"}"#).expect("pair");
    assert_eq!(pair.access, "a.b.c");
    assert_eq!(pair.refresh, "d.e.f");
}
