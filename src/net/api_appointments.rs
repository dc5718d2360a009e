//! Appointment endpoints.
//!
//! The backend stores one combined ISO datetime per appointment; form
//! date + time inputs are merged by [`appointment_datetime`] before they
//! go on the wire.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_appointments_test.rs"]
mod api_appointments_test;

use super::gateway::{ApiClient, ApiError};
use super::types::{AppointmentListData, AppointmentStatus, Envelope};

/// Filters for `GET /appointment`.
///
/// The backend scopes the listing by the caller's token: doctors see their
/// own queue, patients their own bookings, admins everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppointmentQuery {
    /// Date-only filter (`YYYY-MM-DD`); empty means all dates.
    pub date: String,
    pub status: Option<AppointmentStatus>,
    pub page: u32,
    pub size: u32,
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn appointment_list_query(query: &AppointmentQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if !query.date.trim().is_empty() {
        params.push(("date", query.date.trim().to_owned()));
    }
    if let Some(status) = query.status {
        params.push(("status", status.as_str().to_owned()));
    }
    params.push(("page", query.page.to_string()));
    params.push(("size", query.size.to_string()));
    params
}

/// Merge form `YYYY-MM-DD` + `HH:mm` inputs into the wire datetime.
pub fn appointment_datetime(date: &str, time: &str) -> String {
    format!("{date}T{time}:00")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn appointment_endpoint(appointment_id: i64) -> String {
    format!("/appointment/{appointment_id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn appointment_admin_endpoint(appointment_id: i64) -> String {
    format!("/appointment/{appointment_id}/admin")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn appointment_status_endpoint(appointment_id: i64) -> String {
    format!("/appointment/{appointment_id}/status")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn create_payload(
    patient_user_id: i64,
    doctor_user_id: i64,
    datetime: &str,
) -> serde_json::Value {
    serde_json::json!({
        "patient_user_id": patient_user_id,
        "doctor_user_id": doctor_user_id,
        "date": datetime,
    })
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn update_payload(
    doctor_user_id: i64,
    datetime: &str,
    status: AppointmentStatus,
) -> serde_json::Value {
    serde_json::json!({
        "doctor_user_id": doctor_user_id,
        "date": datetime,
        "status": status,
    })
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn status_payload(status: AppointmentStatus) -> serde_json::Value {
    serde_json::json!({ "status": status })
}

/// `GET /appointment`.
#[cfg(feature = "csr")]
pub async fn list_appointments(
    api: &ApiClient,
    query: &AppointmentQuery,
) -> Result<Envelope<AppointmentListData>, ApiError> {
    let response = api.get("/appointment", &appointment_list_query(query)).await?;
    super::gateway::decode(response).await
}

#[cfg(not(feature = "csr"))]
pub async fn list_appointments(
    _api: &ApiClient,
    _query: &AppointmentQuery,
) -> Result<Envelope<AppointmentListData>, ApiError> {
    Err(ApiError::Unsupported)
}

/// `POST /appointment` — booked by a patient for themselves, or by an
/// admin for any patient.
#[cfg(feature = "csr")]
pub async fn create_appointment(
    api: &ApiClient,
    patient_user_id: i64,
    doctor_user_id: i64,
    datetime: &str,
) -> Result<(), ApiError> {
    api.post("/appointment", &create_payload(patient_user_id, doctor_user_id, datetime))
        .await?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub async fn create_appointment(
    _api: &ApiClient,
    _patient_user_id: i64,
    _doctor_user_id: i64,
    _datetime: &str,
) -> Result<(), ApiError> {
    Err(ApiError::Unsupported)
}

/// `PUT /appointment/{id}` — reschedule by the owning patient.
#[cfg(feature = "csr")]
pub async fn update_appointment(
    api: &ApiClient,
    appointment_id: i64,
    doctor_user_id: i64,
    datetime: &str,
    status: AppointmentStatus,
) -> Result<(), ApiError> {
    api.put(
        &appointment_endpoint(appointment_id),
        &update_payload(doctor_user_id, datetime, status),
    )
    .await?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub async fn update_appointment(
    _api: &ApiClient,
    _appointment_id: i64,
    _doctor_user_id: i64,
    _datetime: &str,
    _status: AppointmentStatus,
) -> Result<(), ApiError> {
    Err(ApiError::Unsupported)
}

/// `PUT /appointment/{id}/admin` — full edit by an admin.
#[cfg(feature = "csr")]
pub async fn update_appointment_admin(
    api: &ApiClient,
    appointment_id: i64,
    doctor_user_id: i64,
    datetime: &str,
    status: AppointmentStatus,
) -> Result<(), ApiError> {
    api.put(
        &appointment_admin_endpoint(appointment_id),
        &update_payload(doctor_user_id, datetime, status),
    )
    .await?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub async fn update_appointment_admin(
    _api: &ApiClient,
    _appointment_id: i64,
    _doctor_user_id: i64,
    _datetime: &str,
    _status: AppointmentStatus,
) -> Result<(), ApiError> {
    Err(ApiError::Unsupported)
}

/// `PATCH /appointment/{id}/status` — approve/reject by the doctor.
#[cfg(feature = "csr")]
pub async fn update_appointment_status(
    api: &ApiClient,
    appointment_id: i64,
    status: AppointmentStatus,
) -> Result<(), ApiError> {
    api.patch(&appointment_status_endpoint(appointment_id), &status_payload(status))
        .await?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub async fn update_appointment_status(
    _api: &ApiClient,
    _appointment_id: i64,
    _status: AppointmentStatus,
) -> Result<(), ApiError> {
    Err(ApiError::Unsupported)
}

/// `DELETE /appointment/{id}` — admin only.
#[cfg(feature = "csr")]
pub async fn delete_appointment(api: &ApiClient, appointment_id: i64) -> Result<(), ApiError> {
    api.delete(&appointment_endpoint(appointment_id)).await?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub async fn delete_appointment(_api: &ApiClient, _appointment_id: i64) -> Result<(), ApiError> {
    Err(ApiError::Unsupported)
}
