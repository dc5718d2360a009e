use super::*;

#[test]
fn registration_lands_on_the_patient_dashboard() {
    assert_eq!(post_register_route(), "/dashboard-patient");
}
