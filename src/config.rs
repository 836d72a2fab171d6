//! Auth client configuration parsed from environment variables.

pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:8080/api/auth/";
pub const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_AUTH_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base URL of the auth service, always ending in `/` so endpoint paths
    /// append cleanly.
    pub base_url: String,
    pub timeouts: HttpTimeouts,
}

impl AuthConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `AUTH_BASE_URL`: default `http://localhost:8080/api/auth/`
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 30
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("AUTH_BASE_URL").unwrap_or_else(|_| DEFAULT_AUTH_BASE_URL.to_string());
        Self {
            base_url: normalize_base_url(base_url),
            timeouts: HttpTimeouts {
                request_secs: env_parse_u64("AUTH_REQUEST_TIMEOUT_SECS", DEFAULT_AUTH_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse_u64("AUTH_CONNECT_TIMEOUT_SECS", DEFAULT_AUTH_CONNECT_TIMEOUT_SECS),
            },
        }
    }

    /// Config pointing at the given base URL, with default timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeouts: HttpTimeouts {
                request_secs: DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_AUTH_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_BASE_URL)
    }
}

fn normalize_base_url(raw: String) -> String {
    if raw.ends_with('/') { raw } else { format!("{raw}/") }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
