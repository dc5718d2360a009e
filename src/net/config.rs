//! API endpoint configuration injected at build time.
//!
//! The backend location is a deployment concern, so it arrives through the
//! build environment (the same way the previous Vite frontend consumed
//! `VITE_API_URL`) rather than being computed at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Compile-time base URL override.
const BASE_URL: Option<&str> = option_env!("CLINIC_API_BASE_URL");
/// Compile-time request deadline override, in milliseconds.
const TIMEOUT_MS: Option<&str> = option_env!("CLINIC_API_TIMEOUT_MS");

/// Where and how patiently the client talks to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto.
    pub base_url: String,
    /// Per-request deadline in milliseconds.
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_owned(),
            timeout_ms: 5_000,
        }
    }
}

impl ApiConfig {
    /// Build-time configuration, with defaults for anything unset.
    pub fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: BASE_URL.map_or(defaults.base_url, normalize_base_url),
            timeout_ms: TIMEOUT_MS.and_then(parse_timeout_ms).unwrap_or(defaults.timeout_ms),
        }
    }
}

/// Trim a trailing slash so path joins never double it.
fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

/// Positive integer milliseconds; anything else is ignored.
fn parse_timeout_ms(raw: &str) -> Option<u32> {
    raw.trim().parse().ok().filter(|ms| *ms > 0)
}
