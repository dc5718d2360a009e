//! Outbound request gateway attaching the session's bearer credential.
//!
//! ERROR HANDLING
//! ==============
//! An absent session sends the request unauthenticated and lets the server
//! decide. An unreadable credential store instead rejects the request:
//! that is a broken client, not a logged-out one, and must surface. The
//! gateway never redirects, retries, or refreshes on 401/403.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use crate::session::store::{SessionStore, StorageError};

use super::config::ApiConfig;

#[cfg(feature = "csr")]
use gloo_net::http::{Request, RequestBuilder, Response};

/// Failures surfaced by API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The credential store could not be read while building the request.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(String),
    /// The configured deadline elapsed first.
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// Non-success HTTP status, carrying the backend message when present.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// HTTP calls are browser-only.
    #[error("not available outside the browser")]
    Unsupported,
}

/// `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Header value to attach for the current store contents.
///
/// `Ok(None)` means "send unauthenticated": no record, or a record whose
/// token is empty. Only a failing backend read is an error.
pub fn authorization_header(store: &SessionStore) -> Result<Option<String>, StorageError> {
    let record = store.try_get()?;
    Ok(record
        .map(|r| r.token)
        .filter(|token| !token.is_empty())
        .map(|token| bearer(&token)))
}

/// Join an endpoint path onto the configured base.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Fallback error text when the backend sends no message body.
pub fn default_status_message(status: u16) -> String {
    format!("request failed with status {status}")
}

/// Shared HTTP client: base URL, deadline, and credential attachment.
///
/// Cheap to clone; provided as app-wide context next to the session store.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    store: SessionStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, store: SessionStore) -> Self {
        Self { config, store }
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    pub fn timeout_ms(&self) -> u32 {
        self.config.timeout_ms
    }

    /// The credential store requests read through.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Attach the session credential, or fail if the store is unreadable.
    #[cfg(feature = "csr")]
    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        match authorization_header(&self.store)? {
            Some(value) => Ok(builder.header("Authorization", &value)),
            None => Ok(builder),
        }
    }

    #[cfg(feature = "csr")]
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response, ApiError> {
        let builder = Request::get(&self.url(path)).query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let request = self
            .authorized(builder)?
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        self.send(request).await
    }

    #[cfg(feature = "csr")]
    pub async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let request = self
            .authorized(Request::post(&self.url(path)))?
            .json(body)
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        self.send(request).await
    }

    #[cfg(feature = "csr")]
    pub async fn put<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let request = self
            .authorized(Request::put(&self.url(path)))?
            .json(body)
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        self.send(request).await
    }

    #[cfg(feature = "csr")]
    pub async fn patch<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let request = self
            .authorized(Request::patch(&self.url(path)))?
            .json(body)
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        self.send(request).await
    }

    #[cfg(feature = "csr")]
    pub async fn delete(&self, path: &str) -> Result<Response, ApiError> {
        let request = self
            .authorized(Request::delete(&self.url(path)))?
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        self.send(request).await
    }

    /// Send with the configured deadline; non-2xx becomes [`ApiError::Status`].
    #[cfg(feature = "csr")]
    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        use futures::future::{Either, select};

        let deadline_ms = self.config.timeout_ms;
        let send = Box::pin(request.send());
        let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(deadline_ms));
        let response = match select(send, deadline).await {
            Either::Left((result, _)) => result.map_err(|err| ApiError::Transport(err.to_string()))?,
            Either::Right(((), _)) => return Err(ApiError::Timeout(deadline_ms)),
        };
        if response.ok() {
            Ok(response)
        } else {
            Err(status_error(response).await)
        }
    }
}

#[cfg(feature = "csr")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(feature = "csr")]
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message.unwrap_or_else(|| default_status_message(status)),
        Err(_) => default_status_message(status),
    };
    ApiError::Status { status, message }
}

/// Decode a JSON body into `T`.
#[cfg(feature = "csr")]
pub async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
