//! Wire DTOs for the clinic REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON verbatim so serde round-trips stay
//! lossless. Unknown fields are ignored everywhere; optional fields default
//! so older backend payloads keep deserializing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role as issued by the authentication API.
///
/// Unrecognized strings are preserved as [`Role::Unknown`] instead of
/// failing the whole record: a session written by a newer backend stays
/// readable, stays authenticated, and is denied by every allowed-set check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
    Unknown(String),
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ADMIN" => Role::Admin,
            "DOCTOR" => Role::Doctor,
            "PATIENT" => Role::Patient,
            _ => Role::Unknown(value),
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_owned()
    }
}

impl Role {
    /// Wire string for the known roles, or the raw stored text.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::Doctor => "DOCTOR",
            Role::Patient => "PATIENT",
            Role::Unknown(raw) => raw,
        }
    }
}

/// Persisted proof-of-login: the login response stored verbatim under the
/// `"User"` storage key. Presence of this record is the definition of
/// "authenticated"; there is no separate flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque bearer credential attached to authenticated requests.
    pub token: String,
    /// Identity of the authenticated account.
    pub user: SessionUser,
}

/// The `user` object inside a [`SessionRecord`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Numeric account identifier.
    pub user_id: i64,
    /// Authorization role.
    pub role: Role,
    /// Display name, when the backend includes profile fields.
    #[serde(default)]
    pub name: Option<String>,
    /// Account email, when included.
    #[serde(default)]
    pub email: Option<String>,
}

/// Standard `{ message, data }` envelope on non-login endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// Pagination block attached to list payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
}

/// Patient sex as recorded on the profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "MALE")]
    Male,
    #[serde(rename = "FEMALE")]
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

/// A user account as returned by `/user` listings and `/user/detail/{id}`.
///
/// One shape serves doctors and patients; role-specific fields are simply
/// absent on the other role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Doctor-only.
    #[serde(default)]
    pub specialization: Option<String>,
    /// Patient-only from here down.
    #[serde(default)]
    pub address: Option<String>,
    /// ISO 8601 datetime; forms show the date part only.
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub contact_number: Option<String>,
}

/// `data` payload of `GET /user` and `GET /user/all-doctor`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserListData {
    pub users: Vec<UserAccount>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Lifecycle of an appointment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    Approved,
    Rejected,
    Completed,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Approved,
        AppointmentStatus::Rejected,
        AppointmentStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "SCHEDULED",
            AppointmentStatus::Approved => "APPROVED",
            AppointmentStatus::Rejected => "REJECTED",
            AppointmentStatus::Completed => "COMPLETED",
        }
    }
}

/// Minimal party reference embedded in appointment rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    pub user_id: i64,
    pub name: String,
}

/// An appointment row as listed by `GET /appointment`.
///
/// `date` is a combined ISO datetime (`YYYY-MM-DDTHH:mm:ss`); there is no
/// separate time field on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: i64,
    #[serde(default)]
    pub patient: Option<PersonRef>,
    #[serde(default)]
    pub doctor: Option<PersonRef>,
    pub date: String,
    pub status: AppointmentStatus,
}

/// `data` payload of `GET /appointment`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppointmentListData {
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register-patient`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPatientPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    /// Date-only string (`YYYY-MM-DD`) from the form.
    pub birth_date: String,
    pub gender: Gender,
    pub contact_number: String,
}

/// Body of `POST /user/create-doctor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateDoctorPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub specialization: String,
}

/// Body of `PUT /user/update-doctor/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateDoctorPayload {
    pub name: String,
    pub email: String,
    pub specialization: String,
}

/// Body of `PUT /user/update-patient/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdatePatientPayload {
    pub name: String,
    pub email: String,
    pub address: String,
    pub birth_date: String,
    pub gender: Gender,
    pub contact_number: String,
}
