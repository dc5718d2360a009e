use super::*;

#[test]
fn endpoints_match_backend_paths() {
    assert_eq!(appointment_endpoint(3), "/appointment/3");
    assert_eq!(appointment_admin_endpoint(3), "/appointment/3/admin");
    assert_eq!(appointment_status_endpoint(3), "/appointment/3/status");
}

#[test]
fn datetime_merges_form_date_and_time() {
    assert_eq!(appointment_datetime("2025-03-14", "09:30"), "2025-03-14T09:30:00");
}

#[test]
fn create_payload_uses_user_id_field_names() {
    assert_eq!(
        create_payload(9, 7, "2025-03-14T09:30:00"),
        serde_json::json!({
            "patient_user_id": 9,
            "doctor_user_id": 7,
            "date": "2025-03-14T09:30:00",
        })
    );
}

#[test]
fn update_payload_carries_doctor_datetime_and_status() {
    assert_eq!(
        update_payload(7, "2025-03-14T10:00:00", AppointmentStatus::Approved),
        serde_json::json!({
            "doctor_user_id": 7,
            "date": "2025-03-14T10:00:00",
            "status": "APPROVED",
        })
    );
}

#[test]
fn status_payload_is_the_bare_status() {
    assert_eq!(
        status_payload(AppointmentStatus::Rejected),
        serde_json::json!({ "status": "REJECTED" })
    );
}

#[test]
fn list_query_skips_blank_filters() {
    let query = AppointmentQuery {
        date: String::new(),
        status: None,
        page: 1,
        size: 10,
    };
    assert_eq!(
        appointment_list_query(&query),
        vec![("page", "1".to_owned()), ("size", "10".to_owned())]
    );
}

#[test]
fn list_query_includes_date_and_status_when_set() {
    let query = AppointmentQuery {
        date: "2025-03-14".to_owned(),
        status: Some(AppointmentStatus::Scheduled),
        page: 2,
        size: 10,
    };
    assert_eq!(
        appointment_list_query(&query),
        vec![
            ("date", "2025-03-14".to_owned()),
            ("status", "SCHEDULED".to_owned()),
            ("page", "2".to_owned()),
            ("size", "10".to_owned()),
        ]
    );
}
