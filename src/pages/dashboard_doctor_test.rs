use super::*;

#[test]
fn doctor_tabs_cover_queue_and_profile() {
    assert_eq!(DoctorTab::ALL, [DoctorTab::Appointments, DoctorTab::Profile]);
    assert_eq!(DoctorTab::Appointments.label(), "Appointments");
    assert_eq!(DoctorTab::Profile.label(), "My Profile");
}
