//! Pure form validation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages validate before every submit and render the returned message
//! inline; the backend re-validates everything, so these rules only need
//! to match its contract, not enforce it.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{
    CreateDoctorPayload, Gender, LoginPayload, RegisterPatientPayload, UpdateDoctorPayload,
    UpdatePatientPayload,
};

/// Minimal email shape check: something before `@`, a dot somewhere in the
/// domain, no embedded whitespace.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn checked_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(email) {
        return Err("Invalid email address");
    }
    Ok(email.to_owned())
}

fn required(raw: &str, message: &'static str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() { Err(message) } else { Ok(value.to_owned()) }
}

fn checked_password(raw: &str) -> Result<String, &'static str> {
    if raw.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(raw.to_owned())
}

pub fn parse_gender(raw: &str) -> Option<Gender> {
    match raw {
        "MALE" => Some(Gender::Male),
        "FEMALE" => Some(Gender::Female),
        _ => None,
    }
}

/// Login form: both fields present, email well-formed.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginPayload, &'static str> {
    let email = checked_email(email)?;
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(LoginPayload {
        email,
        password: password.to_owned(),
    })
}

/// Patient registration form.
pub fn validate_sign_up_input(
    name: &str,
    email: &str,
    password: &str,
    address: &str,
    birth_date: &str,
    gender: &str,
    contact_number: &str,
) -> Result<RegisterPatientPayload, &'static str> {
    Ok(RegisterPatientPayload {
        name: required(name, "Name is required")?,
        email: checked_email(email)?,
        password: checked_password(password)?,
        address: required(address, "Address is required")?,
        birth_date: required(birth_date, "Birth date is required")?,
        gender: parse_gender(gender).ok_or("Gender is required")?,
        contact_number: required(contact_number, "Contact number is required")?,
    })
}

/// Admin create-doctor form.
pub fn validate_create_doctor_input(
    name: &str,
    email: &str,
    password: &str,
    specialization: &str,
) -> Result<CreateDoctorPayload, &'static str> {
    Ok(CreateDoctorPayload {
        name: required(name, "Name is required")?,
        email: checked_email(email)?,
        password: checked_password(password)?,
        specialization: required(specialization, "Specialization is required")?,
    })
}

/// Doctor edit form (admin) and the doctor's own profile form.
pub fn validate_doctor_profile_input(
    name: &str,
    email: &str,
    specialization: &str,
) -> Result<UpdateDoctorPayload, &'static str> {
    Ok(UpdateDoctorPayload {
        name: required(name, "Name is required")?,
        email: checked_email(email)?,
        specialization: required(specialization, "Specialization is required")?,
    })
}

/// Patient edit form (admin) and the patient's own profile form.
pub fn validate_patient_profile_input(
    name: &str,
    email: &str,
    address: &str,
    birth_date: &str,
    gender: &str,
    contact_number: &str,
) -> Result<UpdatePatientPayload, &'static str> {
    Ok(UpdatePatientPayload {
        name: required(name, "Name is required")?,
        email: checked_email(email)?,
        address: required(address, "Address is required")?,
        birth_date: required(birth_date, "Birth date is required")?,
        gender: parse_gender(gender).ok_or("Gender is required")?,
        contact_number: required(contact_number, "Contact number is required")?,
    })
}

/// Appointment forms: a chosen doctor plus date and time inputs.
pub fn validate_appointment_input(
    doctor_id: Option<i64>,
    date: &str,
    time: &str,
) -> Result<(i64, String, String), &'static str> {
    let doctor_id = doctor_id.ok_or("Doctor is required")?;
    let date = required(date, "Date is required")?;
    let time = required(time, "Time is required")?;
    Ok((doctor_id, date, time))
}
