use super::*;

#[test]
fn login_payload_serializes_credentials_only() {
    let payload = LoginPayload {
        email: "budi@mail.example".to_owned(),
        password: "secret1".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "email": "budi@mail.example", "password": "secret1" })
    );
}

#[test]
fn auth_endpoints_match_backend_paths() {
    assert_eq!(LOGIN_ENDPOINT, "/auth/login");
    assert_eq!(REGISTER_PATIENT_ENDPOINT, "/auth/register-patient");
}
