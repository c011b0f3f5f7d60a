use super::*;

#[test]
fn redirect_target_preserves_requested_location() {
    assert_eq!(login_redirect_target("/appointments"), "/login?from=/appointments");
}

#[test]
fn redirect_target_handles_nested_paths() {
    assert_eq!(
        login_redirect_target("/admin/dashboard"),
        "/login?from=/admin/dashboard"
    );
}
