//! Networking modules for the clinic REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns credential attachment and transport policy, `config`
//! says where the backend lives, `types` defines the wire schema, and the
//! `api_*` modules map one-to-one onto backend endpoint groups.

pub mod api_appointments;
pub mod api_auth;
pub mod api_users;
pub mod config;
pub mod gateway;
pub mod types;

use leptos::prelude::*;

use self::gateway::ApiClient;

/// Install `api` as context for the component tree below the caller.
pub fn provide_api_client(api: ApiClient) {
    provide_context(api);
}

/// The API client provided at app start.
pub fn use_api_client() -> ApiClient {
    expect_context::<ApiClient>()
}
