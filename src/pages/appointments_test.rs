use super::*;

fn doctors() -> Vec<DoctorChoice> {
    vec![
        DoctorChoice {
            name: "Dr. Sarah Johnson".to_owned(),
            specialty: "Cardiology".to_owned(),
        },
        DoctorChoice {
            name: "Dr. Michael Chen".to_owned(),
            specialty: "Dermatology".to_owned(),
        },
    ]
}

#[test]
fn specialty_follows_selected_doctor() {
    assert_eq!(specialty_for(&doctors(), "Dr. Michael Chen"), "Dermatology");
}

#[test]
fn specialty_empty_for_unknown_doctor() {
    assert_eq!(specialty_for(&doctors(), "Dr. Nobody"), "");
    assert_eq!(specialty_for(&doctors(), ""), "");
}

#[test]
fn booking_requires_all_core_fields() {
    assert!(validate_booking("Dr. Sarah Johnson", "2026-08-10T10:00", "Checkup").is_ok());
    assert!(validate_booking("", "2026-08-10T10:00", "Checkup").is_err());
    assert!(validate_booking("Dr. Sarah Johnson", "", "Checkup").is_err());
    assert!(validate_booking("Dr. Sarah Johnson", "2026-08-10T10:00", "   ").is_err());
}

#[test]
fn status_class_maps_known_states() {
    assert_eq!(status_class("confirmed"), "status-badge status-badge--confirmed");
    assert_eq!(status_class("cancelled"), "status-badge status-badge--cancelled");
    assert_eq!(status_class("scheduled"), "status-badge status-badge--scheduled");
    assert_eq!(status_class("anything"), "status-badge status-badge--scheduled");
}
