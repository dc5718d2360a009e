use super::*;

#[test]
fn portal_titles_are_role_branded() {
    assert_eq!(LoginPortal::Patient.title(), "Patient Login");
    assert_eq!(LoginPortal::Doctor.title(), "Doctor Login");
    assert_eq!(LoginPortal::Admin.title(), "Admin Login");
}

#[test]
fn destination_is_keyed_by_portal_not_response_role() {
    assert_eq!(LoginPortal::Patient.dashboard_route(), "/dashboard-patient");
    assert_eq!(LoginPortal::Doctor.dashboard_route(), "/dashboard-doctor");
    assert_eq!(LoginPortal::Admin.dashboard_route(), "/dashboard-admin");
}
