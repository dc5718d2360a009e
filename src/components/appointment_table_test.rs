use super::*;

#[test]
fn only_admin_and_patient_scopes_edit() {
    assert!(can_edit(AppointmentScope::Admin));
    assert!(can_edit(AppointmentScope::Patient));
    assert!(!can_edit(AppointmentScope::Doctor));
}

#[test]
fn only_admin_scope_deletes() {
    assert!(can_delete(AppointmentScope::Admin));
    assert!(!can_delete(AppointmentScope::Doctor));
    assert!(!can_delete(AppointmentScope::Patient));
}

#[test]
fn doctors_decide_only_pending_appointments() {
    assert!(can_decide(AppointmentScope::Doctor, AppointmentStatus::Scheduled));
    assert!(!can_decide(AppointmentScope::Doctor, AppointmentStatus::Approved));
    assert!(!can_decide(AppointmentScope::Doctor, AppointmentStatus::Rejected));
    assert!(!can_decide(AppointmentScope::Admin, AppointmentStatus::Scheduled));
    assert!(!can_decide(AppointmentScope::Patient, AppointmentStatus::Scheduled));
}

#[test]
fn status_filter_parses_wire_strings_and_rejects_junk() {
    assert_eq!(parse_status_filter("SCHEDULED"), Some(AppointmentStatus::Scheduled));
    assert_eq!(parse_status_filter("COMPLETED"), Some(AppointmentStatus::Completed));
    assert_eq!(parse_status_filter(""), None);
    assert_eq!(parse_status_filter("scheduled"), None);
}

#[test]
fn selected_id_parses_select_values() {
    assert_eq!(parse_selected_id("7"), Some(7));
    assert_eq!(parse_selected_id(" 42 "), Some(42));
    assert_eq!(parse_selected_id(""), None);
    assert_eq!(parse_selected_id("Select Doctor"), None);
}

#[test]
fn doctors_get_no_create_button() {
    assert_eq!(create_button_label(AppointmentScope::Admin), Some("Add Appointment"));
    assert_eq!(create_button_label(AppointmentScope::Patient), Some("Book Appointment"));
    assert_eq!(create_button_label(AppointmentScope::Doctor), None);
}
