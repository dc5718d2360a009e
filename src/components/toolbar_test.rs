use super::*;

#[test]
fn logout_always_targets_patient_login() {
    assert_eq!(logout_route(), "/login-patient");
}

#[test]
fn display_name_prefers_profile_name() {
    assert_eq!(display_name(Some("Dr. Siti"), Some(7)), "Dr. Siti");
    assert_eq!(display_name(Some(""), Some(7)), "user #7");
    assert_eq!(display_name(None, Some(7)), "user #7");
    assert_eq!(display_name(None, None), "");
}
