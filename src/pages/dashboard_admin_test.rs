use super::*;

#[test]
fn sidebar_lists_every_panel_once() {
    assert_eq!(
        AdminPanel::ALL,
        [AdminPanel::Doctors, AdminPanel::Patients, AdminPanel::Appointments]
    );
}

#[test]
fn panel_labels_match_the_sidebar() {
    assert_eq!(AdminPanel::Doctors.label(), "Doctors");
    assert_eq!(AdminPanel::Patients.label(), "Patients");
    assert_eq!(AdminPanel::Appointments.label(), "Appointments");
}
