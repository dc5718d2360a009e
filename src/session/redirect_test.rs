use super::*;

#[test]
fn each_known_role_maps_to_its_dashboard() {
    assert_eq!(landing_route(Some(&Role::Admin)), "/dashboard-admin");
    assert_eq!(landing_route(Some(&Role::Doctor)), "/dashboard-doctor");
    assert_eq!(landing_route(Some(&Role::Patient)), "/dashboard-patient");
}

#[test]
fn logged_out_lands_on_patient_login() {
    assert_eq!(landing_route(None), "/login-patient");
}

#[test]
fn unrecognized_role_falls_back_to_patient_login() {
    let role = Role::Unknown("NURSE".to_owned());
    assert_eq!(landing_route(Some(&role)), "/login-patient");
}
