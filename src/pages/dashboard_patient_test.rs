use super::*;

#[test]
fn patient_tabs_cover_bookings_directory_and_profile() {
    assert_eq!(
        PatientTab::ALL,
        [PatientTab::Appointments, PatientTab::Doctors, PatientTab::Profile]
    );
    assert_eq!(PatientTab::Appointments.label(), "My Appointments");
    assert_eq!(PatientTab::Doctors.label(), "Find a Doctor");
    assert_eq!(PatientTab::Profile.label(), "My Profile");
}
