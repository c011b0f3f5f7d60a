use super::*;

fn login_response(user_id: Option<i64>) -> LoginResponse {
    LoginResponse {
        access_token: "jwt-user".to_owned(),
        token_type: Some("bearer".to_owned()),
        user_id,
        email: Some("user@example.com".to_owned()),
        full_name: Some("Pat Doe".to_owned()),
    }
}

// =============================================================
// Privileged pair detection
// =============================================================

#[test]
fn admin_pair_is_detected() {
    assert!(is_admin_credentials("admin@gmail.com", "admin"));
}

#[test]
fn near_miss_pairs_take_the_standard_path() {
    assert!(!is_admin_credentials("admin@gmail.com", "Admin"));
    assert!(!is_admin_credentials("admin@example.com", "admin"));
    assert!(!is_admin_credentials("", ""));
}

// =============================================================
// Session construction
// =============================================================

#[test]
fn admin_session_carries_admin_role_and_token_only() {
    let record = admin_session(AdminLoginResponse {
        access_token: "jwt-admin".to_owned(),
        token_type: Some("bearer".to_owned()),
    });
    assert_eq!(record.role, Role::Admin);
    assert_eq!(record.access_token, "jwt-admin");
    assert_eq!(record.user_id, None);
    assert_eq!(record.email, None);
    assert!(record.is_present());
}

#[test]
fn standard_session_carries_user_role_and_identity() {
    let record = session_from_login(login_response(Some(17))).unwrap();
    assert_eq!(record.role, Role::User);
    assert_eq!(record.user_id.as_deref(), Some("17"));
    assert_eq!(record.email.as_deref(), Some("user@example.com"));
    assert_eq!(record.display_name.as_deref(), Some("Pat Doe"));
}

#[test]
fn success_body_without_user_id_is_rejected() {
    let result = session_from_login(login_response(None));
    assert_eq!(result, Err(INVALID_RESPONSE_MESSAGE.to_owned()));
}

// =============================================================
// Outcome navigation
// =============================================================

#[test]
fn admin_outcome_navigates_to_admin_dashboard() {
    let outcome = LoginOutcome::Admin(admin_session(AdminLoginResponse {
        access_token: "jwt-admin".to_owned(),
        token_type: None,
    }));
    assert_eq!(outcome.redirect_target(), Some("/admin/dashboard"));
}

#[test]
fn standard_outcome_navigates_to_landing() {
    let record = session_from_login(login_response(Some(17))).unwrap();
    assert_eq!(LoginOutcome::Standard(record).redirect_target(), Some("/"));
}

#[test]
fn failed_outcome_does_not_navigate() {
    let outcome = LoginOutcome::Failed("Invalid credentials".to_owned());
    assert_eq!(outcome.redirect_target(), None);
}
