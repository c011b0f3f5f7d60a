use super::*;

#[test]
fn severity_class_maps_known_levels() {
    assert_eq!(severity_class("low"), "severity-badge severity-badge--low");
    assert_eq!(severity_class("high"), "severity-badge severity-badge--high");
}

#[test]
fn severity_class_defaults_to_medium() {
    assert_eq!(severity_class("medium"), "severity-badge severity-badge--medium");
    assert_eq!(severity_class("critical"), "severity-badge severity-badge--medium");
}

#[test]
fn severity_icon_varies_by_level() {
    assert_eq!(severity_icon("low"), "✓");
    assert_eq!(severity_icon("high"), "⚠");
    assert_eq!(severity_icon("unknown"), "ℹ");
}

#[test]
fn parse_age_accepts_digits_and_rejects_noise() {
    assert_eq!(parse_age(" 34 "), Some(34));
    assert_eq!(parse_age(""), None);
    assert_eq!(parse_age("thirty"), None);
}

#[test]
fn build_request_maps_empty_optionals_to_none() {
    let request = build_request("headache", "", "");
    assert_eq!(request.symptoms, "headache");
    assert_eq!(request.age, None);
    assert_eq!(request.gender, None);
}

#[test]
fn build_request_keeps_supplied_demographics() {
    let request = build_request("fever", "34", "female");
    assert_eq!(request.age, Some(34));
    assert_eq!(request.gender.as_deref(), Some("female"));
}

#[test]
fn fallback_result_is_medium_severity() {
    let fallback = fallback_result();
    assert_eq!(fallback.severity, "medium");
    assert_eq!(fallback.possible_conditions.len(), 1);
}
