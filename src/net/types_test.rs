use super::*;

// =============================================================
// Login responses
// =============================================================

#[test]
fn login_response_decodes_full_body() {
    let body = serde_json::json!({
        "access_token": "jwt-abc",
        "token_type": "bearer",
        "user_id": 17,
        "email": "user@example.com",
        "full_name": "Pat Doe"
    });
    let resp: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.access_token, "jwt-abc");
    assert_eq!(resp.user_id, Some(17));
    assert_eq!(resp.full_name.as_deref(), Some("Pat Doe"));
}

#[test]
fn login_response_tolerates_missing_user_id() {
    let body = serde_json::json!({ "access_token": "jwt-abc", "token_type": "bearer" });
    let resp: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.user_id, None);
    assert_eq!(resp.email, None);
}

#[test]
fn doctor_login_response_requires_doctor_id() {
    let body = serde_json::json!({
        "access_token": "jwt",
        "full_name": "Dr. Sarah Johnson",
        "email": "sarah@example.com"
    });
    assert!(serde_json::from_value::<DoctorLoginResponse>(body).is_err());
}

// =============================================================
// Error bodies
// =============================================================

#[test]
fn error_body_decodes_detail() {
    let body = serde_json::json!({ "detail": "Invalid credentials" });
    let err: ErrorBody = serde_json::from_value(body).unwrap();
    assert_eq!(err.detail.as_deref(), Some("Invalid credentials"));
}

#[test]
fn error_body_defaults_to_no_detail() {
    let err: ErrorBody = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(err.detail, None);
}

// =============================================================
// Domain DTOs
// =============================================================

#[test]
fn medication_decodes_with_null_optionals() {
    let body = serde_json::json!({
        "id": 3,
        "user_id": 17,
        "medication_name": "Metformin",
        "dosage": "500mg",
        "frequency": "Twice daily",
        "start_date": "2026-08-01",
        "end_date": null,
        "notes": null,
        "is_active": true,
        "created_at": "2026-08-01T09:00:00"
    });
    let med: Medication = serde_json::from_value(body).unwrap();
    assert_eq!(med.medication_name, "Metformin");
    assert_eq!(med.end_date, None);
    assert_eq!(med.notes, None);
}

#[test]
fn appointment_draft_serializes_notes_field() {
    let draft = AppointmentDraft {
        doctor_name: "Dr. Sarah Johnson".to_owned(),
        specialty: "Cardiology".to_owned(),
        appointment_date: "2026-08-10T10:00:00Z".to_owned(),
        reason: "Checkup".to_owned(),
        notes: None,
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["doctor_name"], "Dr. Sarah Johnson");
    assert!(value["notes"].is_null());
}

#[test]
fn doctors_list_defaults_to_empty() {
    let list: DoctorsList = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(list.doctors.is_empty());
    assert!(list.specialties.is_empty());
}

#[test]
fn patient_summary_defaults_is_active() {
    let body = serde_json::json!({
        "id": 1,
        "full_name": null,
        "email": "user@example.com",
        "created_at": "2026-01-01T00:00:00"
    });
    let patient: PatientSummary = serde_json::from_value(body).unwrap();
    assert!(patient.is_active);
    assert_eq!(patient.full_name, None);
}
