use super::*;
use crate::state::session::{Role, SessionRecord};

fn record(display_name: Option<&str>, email: Option<&str>) -> SessionRecord {
    SessionRecord {
        access_token: "jwt".to_owned(),
        role: Role::User,
        user_id: Some("1".to_owned()),
        email: email.map(str::to_owned),
        display_name: display_name.map(str::to_owned),
    }
}

#[test]
fn identity_prefers_display_name() {
    let state = SessionState {
        record: Some(record(Some("Pat Doe"), Some("pat@example.com"))),
        loading: false,
    };
    assert_eq!(identity_label(&state), "Pat Doe");
}

#[test]
fn identity_falls_back_to_email() {
    let state = SessionState {
        record: Some(record(None, Some("pat@example.com"))),
        loading: false,
    };
    assert_eq!(identity_label(&state), "pat@example.com");
}

#[test]
fn identity_placeholder_without_record() {
    let state = SessionState::default();
    assert_eq!(identity_label(&state), "Account");
}
