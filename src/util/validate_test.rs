use super::*;

#[test]
fn email_shape_accepts_plain_addresses() {
    assert!(is_valid_email("budi@mail.example"));
    assert!(is_valid_email("a.b@clinic.co.id"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    assert!(!is_valid_email("budi"));
    assert!(!is_valid_email("@mail.example"));
    assert!(!is_valid_email("budi@mail"));
    assert!(!is_valid_email("budi@.example"));
    assert!(!is_valid_email("bu di@mail.example"));
}

#[test]
fn login_input_trims_email_and_requires_both_fields() {
    let payload = validate_login_input("  budi@mail.example  ", "secret1").unwrap();
    assert_eq!(payload.email, "budi@mail.example");
    assert_eq!(payload.password, "secret1");

    assert_eq!(validate_login_input("", "secret1"), Err("Email is required"));
    assert_eq!(validate_login_input("not-an-email", "secret1"), Err("Invalid email address"));
    assert_eq!(validate_login_input("budi@mail.example", ""), Err("Password is required"));
}

#[test]
fn sign_up_checks_every_field_in_order() {
    let ok = validate_sign_up_input(
        "Budi",
        "budi@mail.example",
        "secret1",
        "Jl. Melati 5",
        "1990-01-31",
        "MALE",
        "0812000111",
    )
    .unwrap();
    assert_eq!(ok.gender, Gender::Male);

    let missing_name =
        validate_sign_up_input("", "budi@mail.example", "secret1", "a", "b", "MALE", "c");
    assert_eq!(missing_name, Err("Name is required"));

    let short_password =
        validate_sign_up_input("Budi", "budi@mail.example", "12345", "a", "b", "MALE", "c");
    assert_eq!(short_password, Err("Password must be at least 6 characters"));

    let bad_gender =
        validate_sign_up_input("Budi", "budi@mail.example", "secret1", "a", "b", "", "c");
    assert_eq!(bad_gender, Err("Gender is required"));
}

#[test]
fn create_doctor_requires_specialization() {
    let ok = validate_create_doctor_input("Siti", "siti@clinic.example", "secret1", "Cardiology");
    assert!(ok.is_ok());
    assert_eq!(
        validate_create_doctor_input("Siti", "siti@clinic.example", "secret1", "  "),
        Err("Specialization is required")
    );
}

#[test]
fn doctor_profile_update_has_no_password_field() {
    let payload = validate_doctor_profile_input("Siti", "siti@clinic.example", "Cardiology").unwrap();
    assert_eq!(payload.specialization, "Cardiology");
}

#[test]
fn patient_profile_update_parses_gender() {
    let payload = validate_patient_profile_input(
        "Budi",
        "budi@mail.example",
        "Jl. Melati 5",
        "1990-01-31",
        "FEMALE",
        "0812000111",
    )
    .unwrap();
    assert_eq!(payload.gender, Gender::Female);
}

#[test]
fn appointment_input_requires_doctor_date_and_time() {
    assert_eq!(
        validate_appointment_input(Some(7), "2025-03-14", "09:30"),
        Ok((7, "2025-03-14".to_owned(), "09:30".to_owned()))
    );
    assert_eq!(validate_appointment_input(None, "2025-03-14", "09:30"), Err("Doctor is required"));
    assert_eq!(validate_appointment_input(Some(7), " ", "09:30"), Err("Date is required"));
    assert_eq!(validate_appointment_input(Some(7), "2025-03-14", ""), Err("Time is required"));
}
