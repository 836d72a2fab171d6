//! Client SDK for the logistics platform's authentication API.
//!
//! [`AuthClient`] issues login and registration requests to the remote auth
//! service, caches the issued session in an injected [`SessionStore`], drops
//! it on logout, and exposes a synchronous accessor for the cached session.
//!
//! Login failures are normalized into [`LoginOutcome`] values the caller
//! inspects; registration failures propagate as raw [`AuthError`]s the
//! caller handles. The two endpoints deliberately differ — see the `client`
//! module docs.

pub mod client;
pub mod config;
pub mod store;
pub mod types;

pub use client::AuthClient;
pub use config::AuthConfig;
pub use store::{FileStore, MemoryStore, SessionStore, StoreError};
pub use types::{AuthError, LoginOutcome, SessionRecord, UserRole};
