use super::*;

#[test]
fn role_round_trips_known_wire_strings() {
    for (raw, role) in [
        ("ADMIN", Role::Admin),
        ("DOCTOR", Role::Doctor),
        ("PATIENT", Role::Patient),
    ] {
        let parsed: Role = serde_json::from_str(&format!("\"{raw}\"")).unwrap();
        assert_eq!(parsed, role);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), format!("\"{raw}\""));
    }
}

#[test]
fn role_preserves_unrecognized_strings() {
    let parsed: Role = serde_json::from_str("\"SUPERUSER\"").unwrap();
    assert_eq!(parsed, Role::Unknown("SUPERUSER".to_owned()));
    assert_eq!(parsed.as_str(), "SUPERUSER");
    assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"SUPERUSER\"");
}

#[test]
fn session_record_parses_login_response_with_extra_fields() {
    let raw = r#"{
        "token": "abc",
        "user": {
            "user_id": 7,
            "role": "DOCTOR",
            "name": "Dr. Siti",
            "email": "siti@clinic.example",
            "specialization": "Cardiology"
        },
        "message": "Login success"
    }"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.token, "abc");
    assert_eq!(record.user.user_id, 7);
    assert_eq!(record.user.role, Role::Doctor);
    assert_eq!(record.user.name.as_deref(), Some("Dr. Siti"));
}

#[test]
fn session_record_with_unknown_role_still_parses() {
    let raw = r#"{"token":"t","user":{"user_id":1,"role":"NURSE"}}"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.user.role, Role::Unknown("NURSE".to_owned()));
}

#[test]
fn appointment_status_uses_screaming_snake_wire_strings() {
    for status in AppointmentStatus::ALL {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_str()));
        let parsed: AppointmentStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn appointment_list_envelope_parses_backend_shape() {
    let raw = r#"{
        "message": "ok",
        "data": {
            "appointments": [{
                "appointment_id": 3,
                "patient": {"user_id": 9, "name": "Budi"},
                "doctor": {"user_id": 7, "name": "Dr. Siti"},
                "date": "2025-03-14T09:30:00",
                "status": "SCHEDULED"
            }],
            "pagination": {"page": 1, "size": 10, "total_pages": 1, "total_items": 1}
        }
    }"#;
    let envelope: Envelope<AppointmentListData> = serde_json::from_str(raw).unwrap();
    let row = &envelope.data.appointments[0];
    assert_eq!(row.appointment_id, 3);
    assert_eq!(row.patient.as_ref().unwrap().name, "Budi");
    assert_eq!(row.status, AppointmentStatus::Scheduled);
    assert_eq!(envelope.data.pagination.total_items, 1);
}

#[test]
fn user_list_payload_defaults_missing_pagination() {
    let raw = r#"{"message":null,"data":{"users":[]}}"#;
    let envelope: Envelope<UserListData> = serde_json::from_str(raw).unwrap();
    assert_eq!(envelope.data.pagination, Pagination::default());
}

#[test]
fn register_payload_serializes_gender_wire_string() {
    let payload = RegisterPatientPayload {
        name: "Budi".to_owned(),
        email: "budi@mail.example".to_owned(),
        password: "secret1".to_owned(),
        address: "Jl. Melati 5".to_owned(),
        birth_date: "1990-01-31".to_owned(),
        gender: Gender::Male,
        contact_number: "0812000111".to_owned(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["gender"], "MALE");
    assert_eq!(json["birth_date"], "1990-01-31");
}
