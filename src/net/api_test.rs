use super::*;

#[test]
fn api_url_prefixes_the_backend_base() {
    assert_eq!(api_url("/auth/login"), "http://localhost:8000/auth/login");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("jwt-abc"), "Bearer jwt-abc");
}

#[test]
fn login_form_body_encodes_oauth2_fields() {
    assert_eq!(
        login_form_body("you@example.com", "pass word"),
        "username=you%40example.com&password=pass+word"
    );
}

#[test]
fn login_form_body_escapes_reserved_characters() {
    assert_eq!(
        login_form_body("a@b.com", "p&w=1"),
        "username=a%40b.com&password=p%26w%3D1"
    );
}

#[test]
fn medication_endpoint_formats_expected_path() {
    assert_eq!(medication_endpoint(3), "/api/medications/3");
}

#[test]
fn appointment_endpoint_formats_expected_path() {
    assert_eq!(appointment_endpoint(12), "/api/appointments/12");
}
