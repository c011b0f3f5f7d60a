use super::*;
use std::collections::HashMap;

fn store_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn lookup(map: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
    move |key| map.get(key).cloned()
}

#[test]
fn record_round_trips_through_pairs() {
    let record = SessionRecord {
        access_token: "jwt-abc".to_owned(),
        role: Role::Doctor,
        user_id: Some("42".to_owned()),
        email: Some("doc@example.com".to_owned()),
        display_name: Some("Dr. Example".to_owned()),
    };
    let map: HashMap<String, String> = record_to_pairs(&record)
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v))
        .collect();
    assert_eq!(record_from_pairs(lookup(&map)), Some(record));
}

#[test]
fn pairs_cover_every_storage_key() {
    let record = SessionRecord {
        access_token: "jwt".to_owned(),
        role: Role::User,
        user_id: None,
        email: None,
        display_name: None,
    };
    let written: Vec<&str> = record_to_pairs(&record).into_iter().map(|(k, _)| k).collect();
    assert_eq!(written, ALL_KEYS);
}

#[test]
fn missing_identity_fields_are_written_as_empty_strings() {
    let record = SessionRecord {
        access_token: "jwt".to_owned(),
        role: Role::Admin,
        user_id: None,
        email: None,
        display_name: None,
    };
    let pairs = record_to_pairs(&record);
    assert!(pairs.iter().any(|(k, v)| *k == "userId" && v.is_empty()));
    assert!(pairs.iter().any(|(k, v)| *k == "userEmail" && v.is_empty()));
    assert!(pairs.iter().any(|(k, v)| *k == "userName" && v.is_empty()));
}

#[test]
fn no_token_loads_as_no_session() {
    let map = store_of(&[("user_role", "user")]);
    assert_eq!(record_from_pairs(lookup(&map)), None);
}

#[test]
fn empty_token_loads_as_no_session() {
    let map = store_of(&[("token", ""), ("user_role", "admin")]);
    assert_eq!(record_from_pairs(lookup(&map)), None);
}

#[test]
fn empty_identity_values_collapse_to_none() {
    let map = store_of(&[
        ("token", "jwt"),
        ("user_role", "user"),
        ("userId", ""),
        ("userEmail", ""),
        ("userName", ""),
    ]);
    let record = record_from_pairs(lookup(&map)).expect("token present");
    assert_eq!(record.user_id, None);
    assert_eq!(record.email, None);
    assert_eq!(record.display_name, None);
}

#[test]
fn unknown_role_falls_back_to_user() {
    let map = store_of(&[("token", "jwt"), ("user_role", "root")]);
    let record = record_from_pairs(lookup(&map)).expect("token present");
    assert_eq!(record.role, Role::User);
}
