//! Wire DTOs for the authentication endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON bodies field-for-field so serde can
//! stay derive-only. Timestamps remain RFC 3339 strings; nothing in this
//! layer parses or reformats them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// An account as the auth endpoints return it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned numeric identifier.
    pub id: i64,
    /// Email address the account was registered with.
    pub email: String,
    /// Creation timestamp (RFC 3339 string, as sent by the server).
    pub created_at: String,
    /// Last-update timestamp (RFC 3339 string, as sent by the server).
    pub updated_at: String,
}

/// JSON request body shared by sign-up and sign-in.
///
/// Outbound only. The password exists in memory just long enough to serialize
/// the request; `Debug` redacts it so the struct can never leak through log
/// or panic output.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Email address identifying the account.
    pub email: String,
    /// Plain-text password, sent over the transport and nowhere else.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Success body of `POST /auth/signup` (`201 Created`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpResponse {
    /// The newly created account.
    pub user: User,
}

/// Success body of `POST /auth/signin` (`200 OK`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
    /// The signed-in account.
    pub user: User,
    /// Opaque session token to present on authenticated calls.
    pub token: String,
}

/// Failure body the auth endpoints send with any non-2xx status.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason, when the server supplied one.
    #[serde(default)]
    pub error: Option<String>,
}
