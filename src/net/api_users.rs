//! User administration and profile endpoints.
//!
//! Doctor accounts get dedicated create/update/delete paths; patients are
//! created through the public registration endpoint and updated/deleted
//! through their own paths. All of these require an admin or owner token,
//! which the gateway attaches.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_users_test.rs"]
mod api_users_test;

use super::gateway::{ApiClient, ApiError};
use super::types::{
    CreateDoctorPayload, Envelope, Role, UpdateDoctorPayload, UpdatePatientPayload, UserAccount,
    UserListData,
};

/// Filters for `GET /user`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub search: String,
    pub role: Option<Role>,
    pub page: u32,
    pub size: u32,
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn user_list_query(query: &UserQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if !query.search.trim().is_empty() {
        params.push(("search", query.search.trim().to_owned()));
    }
    if let Some(role) = &query.role {
        params.push(("role", role.as_str().to_owned()));
    }
    params.push(("page", query.page.to_string()));
    params.push(("size", query.size.to_string()));
    params
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn user_detail_endpoint(user_id: i64) -> String {
    format!("/user/detail/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn update_doctor_endpoint(user_id: i64) -> String {
    format!("/user/update-doctor/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn delete_doctor_endpoint(user_id: i64) -> String {
    format!("/user/delete-doctor/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn update_patient_endpoint(user_id: i64) -> String {
    format!("/user/update-patient/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn delete_patient_endpoint(user_id: i64) -> String {
    format!("/user/delete-patient/{user_id}")
}

/// `GET /user` — admin listing, filterable by role and search text.
#[cfg(feature = "csr")]
pub async fn list_users(api: &ApiClient, query: &UserQuery) -> Result<Envelope<UserListData>, ApiError> {
    let response = api.get("/user", &user_list_query(query)).await?;
    super::gateway::decode(response).await
}

#[cfg(not(feature = "csr"))]
pub async fn list_users(_api: &ApiClient, _query: &UserQuery) -> Result<Envelope<UserListData>, ApiError> {
    Err(ApiError::Unsupported)
}

/// `GET /user/all-doctor` — doctor directory visible to patients.
#[cfg(feature = "csr")]
pub async fn list_doctors(api: &ApiClient, query: &UserQuery) -> Result<Envelope<UserListData>, ApiError> {
    let response = api.get("/user/all-doctor", &user_list_query(query)).await?;
    super::gateway::decode(response).await
}

#[cfg(not(feature = "csr"))]
pub async fn list_doctors(_api: &ApiClient, _query: &UserQuery) -> Result<Envelope<UserListData>, ApiError> {
    Err(ApiError::Unsupported)
}

/// `GET /user/detail/{id}` — single account, used by the profile forms.
#[cfg(feature = "csr")]
pub async fn user_detail(api: &ApiClient, user_id: i64) -> Result<Envelope<UserAccount>, ApiError> {
    let response = api.get(&user_detail_endpoint(user_id), &[]).await?;
    super::gateway::decode(response).await
}

#[cfg(not(feature = "csr"))]
pub async fn user_detail(_api: &ApiClient, _user_id: i64) -> Result<Envelope<UserAccount>, ApiError> {
    Err(ApiError::Unsupported)
}

/// `POST /user/create-doctor`.
#[cfg(feature = "csr")]
pub async fn create_doctor(api: &ApiClient, payload: &CreateDoctorPayload) -> Result<(), ApiError> {
    api.post("/user/create-doctor", payload).await?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub async fn create_doctor(_api: &ApiClient, _payload: &CreateDoctorPayload) -> Result<(), ApiError> {
    Err(ApiError::Unsupported)
}

/// `PUT /user/update-doctor/{id}` — admin edit or the doctor's own profile.
#[cfg(feature = "csr")]
pub async fn update_doctor(
    api: &ApiClient,
    user_id: i64,
    payload: &UpdateDoctorPayload,
) -> Result<(), ApiError> {
    api.put(&update_doctor_endpoint(user_id), payload).await?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub async fn update_doctor(
    _api: &ApiClient,
    _user_id: i64,
    _payload: &UpdateDoctorPayload,
) -> Result<(), ApiError> {
    Err(ApiError::Unsupported)
}

/// `DELETE /user/delete-doctor/{id}`.
#[cfg(feature = "csr")]
pub async fn delete_doctor(api: &ApiClient, user_id: i64) -> Result<(), ApiError> {
    api.delete(&delete_doctor_endpoint(user_id)).await?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub async fn delete_doctor(_api: &ApiClient, _user_id: i64) -> Result<(), ApiError> {
    Err(ApiError::Unsupported)
}

/// `PUT /user/update-patient/{id}` — admin edit or the patient's own profile.
#[cfg(feature = "csr")]
pub async fn update_patient(
    api: &ApiClient,
    user_id: i64,
    payload: &UpdatePatientPayload,
) -> Result<(), ApiError> {
    api.put(&update_patient_endpoint(user_id), payload).await?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub async fn update_patient(
    _api: &ApiClient,
    _user_id: i64,
    _payload: &UpdatePatientPayload,
) -> Result<(), ApiError> {
    Err(ApiError::Unsupported)
}

/// `DELETE /user/delete-patient/{id}`.
#[cfg(feature = "csr")]
pub async fn delete_patient(api: &ApiClient, user_id: i64) -> Result<(), ApiError> {
    api.delete(&delete_patient_endpoint(user_id)).await?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub async fn delete_patient(_api: &ApiClient, _user_id: i64) -> Result<(), ApiError> {
    Err(ApiError::Unsupported)
}
