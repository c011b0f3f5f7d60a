use super::*;

// =============================================================
// Role round-trips
// =============================================================

#[test]
fn role_as_str_round_trips_through_parse() {
    for role in [Role::User, Role::Doctor, Role::Admin] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_parse_rejects_unknown_values() {
    assert_eq!(Role::parse("superuser"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_defaults_to_user() {
    assert_eq!(Role::default(), Role::User);
}

// =============================================================
// Session presence invariant
// =============================================================

#[test]
fn record_with_token_is_present() {
    let record = SessionRecord {
        access_token: "jwt".to_owned(),
        role: Role::User,
        user_id: Some("7".to_owned()),
        email: None,
        display_name: None,
    };
    assert!(record.is_present());
}

#[test]
fn record_with_empty_token_is_absent() {
    let record = SessionRecord {
        access_token: String::new(),
        role: Role::Admin,
        user_id: None,
        email: None,
        display_name: None,
    };
    assert!(!record.is_present());
}

#[test]
fn session_state_defaults_to_no_record() {
    let state = SessionState::default();
    assert!(state.record.is_none());
    assert!(!state.loading);
}
