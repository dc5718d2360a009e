//! Authentication endpoints.
//!
//! Client-side (csr): real HTTP calls via the gateway.
//! Host builds: stubs returning [`ApiError::Unsupported`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_auth_test.rs"]
mod api_auth_test;

use super::gateway::{ApiClient, ApiError};
use super::types::{LoginPayload, RegisterPatientPayload, SessionRecord};

#[cfg(any(test, feature = "csr"))]
pub(crate) const LOGIN_ENDPOINT: &str = "/auth/login";
#[cfg(any(test, feature = "csr"))]
pub(crate) const REGISTER_PATIENT_ENDPOINT: &str = "/auth/register-patient";

/// `POST /auth/login`.
///
/// The response body is the session record itself, stored verbatim by the
/// caller; it is not wrapped in the usual `{ message, data }` envelope.
#[cfg(feature = "csr")]
pub async fn login(api: &ApiClient, payload: &LoginPayload) -> Result<SessionRecord, ApiError> {
    let response = api.post(LOGIN_ENDPOINT, payload).await?;
    super::gateway::decode(response).await
}

#[cfg(not(feature = "csr"))]
pub async fn login(_api: &ApiClient, _payload: &LoginPayload) -> Result<SessionRecord, ApiError> {
    Err(ApiError::Unsupported)
}

/// `POST /auth/register-patient`.
///
/// Registration doubles as login for the self-service flow: the response
/// is a session record too.
#[cfg(feature = "csr")]
pub async fn register_patient(
    api: &ApiClient,
    payload: &RegisterPatientPayload,
) -> Result<SessionRecord, ApiError> {
    let response = api.post(REGISTER_PATIENT_ENDPOINT, payload).await?;
    super::gateway::decode(response).await
}

#[cfg(not(feature = "csr"))]
pub async fn register_patient(
    _api: &ApiClient,
    _payload: &RegisterPatientPayload,
) -> Result<SessionRecord, ApiError> {
    Err(ApiError::Unsupported)
}
