use super::*;

fn draft() -> RegistrationDraft {
    RegistrationDraft {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "hunter2".to_owned(),
        confirm_password: "hunter2".to_owned(),
        primary_location: "London".to_owned(),
    }
}

#[test]
fn matching_passwords_validate() {
    assert_eq!(draft().validate(), Ok(()));
}

#[test]
fn mismatched_passwords_block_submission() {
    let mut d = draft();
    d.confirm_password = "hunter3".to_owned();
    assert_eq!(d.validate(), Err(PASSWORD_MISMATCH.to_owned()));
}

#[test]
fn mismatch_is_case_sensitive() {
    let mut d = draft();
    d.confirm_password = "Hunter2".to_owned();
    assert!(d.validate().is_err());
}

#[test]
fn empty_passwords_still_match() {
    let mut d = draft();
    d.password = String::new();
    d.confirm_password = String::new();
    assert_eq!(d.validate(), Ok(()));
}

#[test]
fn request_carries_four_fields() {
    let req = draft().request();
    assert_eq!(req.username, "alice");
    assert_eq!(req.email, "alice@example.com");
    assert_eq!(req.password, "hunter2");
    assert_eq!(req.primary_location, "London");
}

#[test]
fn failure_message_prefers_server_detail() {
    let err = ApiError::Http {
        status: 400,
        detail: Some("Username already taken".to_owned()),
    };
    assert_eq!(register_failure_message(&err), "Username already taken");
}

#[test]
fn failure_message_falls_back_to_generic() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(register_failure_message(&err), REGISTRATION_FAILED);
}
