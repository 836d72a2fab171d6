//! Auth API client — login, registration, logout, cached-session lookup.
//!
//! ERROR HANDLING
//! ==============
//! `login` collapses every failure (transport, bad status, malformed body,
//! store write) into [`LoginOutcome::Rejected`], so callers branch on the
//! returned value. `register` and `ping` instead propagate raw
//! [`AuthError`]s for the caller to handle. The asymmetry is intentional:
//! login failures are expected interactive data, registration failures are
//! the caller's problem to surface.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::config::AuthConfig;
use crate::store::SessionStore;
use crate::types::{AuthError, LoginOutcome, SessionRecord, UserRole};

/// Storage slot holding the cached session.
pub const SESSION_KEY: &str = "user";

pub(crate) const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from server. Please try again.";
pub(crate) const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please try again.";

// =============================================================================
// CLIENT
// =============================================================================

/// Client for the remote auth service and the local session slot.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl AuthClient {
    /// Build a client from config and an injected session store.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: AuthConfig, store: Arc<dyn SessionStore>) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url, store })
    }

    /// Build a client configured from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn from_env(store: Arc<dyn SessionStore>) -> Result<Self, AuthError> {
        Self::new(AuthConfig::from_env(), store)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Authenticate against the remote service and cache the issued session.
    ///
    /// A response carrying a token overwrites the session slot
    /// unconditionally and returns [`LoginOutcome::Session`]. Everything
    /// else returns [`LoginOutcome::Rejected`]; the message prefers the
    /// server error body's `message` field, then a status or transport
    /// description, then a generic fallback.
    pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        tracing::info!(username, "attempting login");
        let body = LoginRequest { username, password };

        let response = match self.http.post(self.endpoint("login")).json(&body).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "login request failed");
                return LoginOutcome::Rejected { message: transport_message(&e) };
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(t) => t,
            Err(e) => {
                tracing::error!(error = %e, "login response read failed");
                return LoginOutcome::Rejected { message: transport_message(&e) };
            }
        };

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "login rejected by server");
            return LoginOutcome::Rejected { message: failure_message(status.as_u16(), &text) };
        }

        let Some(record) = parse_session(&text) else {
            tracing::error!("invalid login response format");
            return LoginOutcome::Rejected { message: INVALID_RESPONSE_MESSAGE.to_owned() };
        };

        // The slot holds the response body as received, not a re-serialization.
        if let Err(e) = self.store.set(SESSION_KEY, &text) {
            tracing::error!(error = %e, "session persist failed");
            return LoginOutcome::Rejected { message: LOGIN_FALLBACK_MESSAGE.to_owned() };
        }

        tracing::info!(username, "login succeeded");
        LoginOutcome::Session(record)
    }

    /// Drop the cached session. No remote call; an absent session is a
    /// no-op, and store failures are logged and swallowed.
    pub fn logout(&self) {
        tracing::info!("logging out");
        if let Err(e) = self.store.delete(SESSION_KEY) {
            tracing::warn!(error = %e, "session slot delete failed");
        }
    }

    /// Register a new user and return the raw response body.
    ///
    /// Never touches the session slot.
    ///
    /// # Errors
    ///
    /// Propagates the raw failure: [`AuthError::Request`] on transport
    /// errors, [`AuthError::Response`] on a non-success status,
    /// [`AuthError::Parse`] when the body is not JSON.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<Value, AuthError> {
        tracing::info!(username, role = role.as_str(), "registering new user");
        let body = RegisterRequest { username, email, password, role };

        let response = self
            .http
            .post(self.endpoint("register"))
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "registration failed");
            return Err(AuthError::Response { status: status.as_u16(), body: text });
        }

        let value = serde_json::from_str(&text).map_err(|e| AuthError::Parse(e.to_string()))?;
        tracing::info!(username, "registration succeeded");
        Ok(value)
    }

    /// Synchronously read the cached session, if any.
    ///
    /// An empty slot returns `None`; malformed slot data also degrades to
    /// `None` with a warning rather than failing.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionRecord> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!(error = %e, "session slot read failed");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "cached session is malformed");
                None
            }
        }
    }

    /// Probe the auth service health endpoint (`GET {base}test`).
    ///
    /// # Errors
    ///
    /// Propagates the raw failure like [`AuthClient::register`].
    pub async fn ping(&self) -> Result<String, AuthError> {
        let response = self
            .http
            .get(self.endpoint("test"))
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::Response { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(serde::Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    role: UserRole,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract a session record from a success-status login body. `None` when
/// the body is not JSON or carries no usable token.
pub(crate) fn parse_session(body: &str) -> Option<SessionRecord> {
    let record: SessionRecord = serde_json::from_str(body).ok()?;
    if record.token.is_empty() {
        return None;
    }
    Some(record)
}

/// Resolve the user-facing message for a failed login exchange: the server
/// error body's `message` field when present, otherwise a status
/// description.
pub(crate) fn failure_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(message) = map.get("message").and_then(Value::as_str) {
            if !message.trim().is_empty() {
                return message.to_owned();
            }
        }
    }
    format!("Login failed with status {status}. Please try again.")
}

/// Message for a transport-level failure, falling back to the generic
/// message when the error description is blank.
fn transport_message(error: &reqwest::Error) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        LOGIN_FALLBACK_MESSAGE.to_owned()
    } else {
        message
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
