use super::*;

#[test]
fn doctor_session_maps_identity_fields() {
    let record = doctor_session(DoctorLoginResponse {
        access_token: "jwt-doc".to_owned(),
        token_type: Some("bearer".to_owned()),
        doctor_id: 42,
        full_name: "Dr. Sarah Johnson".to_owned(),
        email: "sarah@example.com".to_owned(),
        specialty: Some("Cardiology".to_owned()),
    });
    assert_eq!(record.role, Role::Doctor);
    assert_eq!(record.user_id.as_deref(), Some("42"));
    assert_eq!(record.email.as_deref(), Some("sarah@example.com"));
    assert_eq!(record.display_name.as_deref(), Some("Dr. Sarah Johnson"));
    assert!(record.is_present());
}
