//! Domain types — session records, user roles, login outcomes, and errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by remote auth operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the auth service failed in transport.
    #[error("auth request failed: {0}")]
    Request(String),

    /// The auth service returned a non-success HTTP status.
    #[error("auth response error: status {status}")]
    Response { status: u16, body: String },

    /// The auth service response body could not be deserialized.
    #[error("auth response parse failed: {0}")]
    Parse(String),

    /// A role string did not match any known role.
    #[error("invalid role: {0} (valid values are: admin, logistics_manager, warehouse_staff, delivery_driver)")]
    InvalidRole(String),
}

// =============================================================================
// USER ROLE
// =============================================================================

/// Role assigned to a platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    LogisticsManager,
    WarehouseStaff,
    DeliveryDriver,
}

impl UserRole {
    /// Wire value sent to and received from the auth service.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::LogisticsManager => "logistics_manager",
            Self::WarehouseStaff => "warehouse_staff",
            Self::DeliveryDriver => "delivery_driver",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = AuthError;

    /// Lenient parse: trimmed, case-insensitive wire value
    /// (`"ADMIN"` and `" warehouse_staff "` both work).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "logistics_manager" => Ok(Self::LogisticsManager),
            "warehouse_staff" => Ok(Self::WarehouseStaff),
            "delivery_driver" => Ok(Self::DeliveryDriver),
            _ => Err(AuthError::InvalidRole(raw.to_owned())),
        }
    }
}

// =============================================================================
// SESSION RECORD
// =============================================================================

/// Server-issued session payload: the auth token plus whatever user metadata
/// the server attached. Unknown fields round-trip through `extra` so the
/// record persists verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Bearer token proving the authenticated session.
    pub token: String,
    /// Remaining response fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionRecord {
    /// Parsed role claim, if the server attached a recognizable one.
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.field("role").and_then(|raw| raw.parse().ok())
    }

    /// String metadata field accessor (`"username"`, `"email"`, ...).
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.extra.get(name).and_then(Value::as_str)
    }
}

// =============================================================================
// LOGIN OUTCOME
// =============================================================================

/// Outcome of a login attempt.
///
/// Failures are data, not errors: every failure path collapses into
/// [`LoginOutcome::Rejected`] so callers branch on the value instead of
/// catching an error.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Authenticated. The record has also been written to the session store.
    Session(SessionRecord),
    /// Login did not produce a session. `message` carries the server's error
    /// message when one was sent, otherwise a transport or fallback
    /// description.
    Rejected {
        message: String,
    },
}

impl LoginOutcome {
    /// The issued session record, if login succeeded.
    #[must_use]
    pub fn session(&self) -> Option<&SessionRecord> {
        match self {
            Self::Session(record) => Some(record),
            Self::Rejected { .. } => None,
        }
    }

    /// `true` when login failed.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
