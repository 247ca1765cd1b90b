//! REST calls for the authentication endpoints.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side: stubs
//! returning [`ApiError::Unavailable`] since signing in is only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Anything the server says about a rejected request is preserved: a non-2xx
//! response becomes [`ApiError::RequestFailed`] carrying the `error` string
//! from the failure body (with a generic per-operation fallback), while a
//! transport-level failure stays a separate variant so callers can tell
//! "the server said no" from "the server never answered".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::types::Credentials;
#[cfg(any(test, feature = "hydrate"))]
use crate::types::ErrorBody;
use crate::types::{SignInResponse, SignUpResponse};

/// Base URL the client targets when none is injected.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_PATH: &str = "/auth/signup";
#[cfg(any(test, feature = "hydrate"))]
const SIGNIN_PATH: &str = "/auth/signin";

#[cfg(any(test, feature = "hydrate"))]
const SIGN_UP_FALLBACK: &str = "Sign up failed";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_IN_FALLBACK: &str = "Sign in failed";

/// Client for the authentication endpoints, bound to one API base URL.
///
/// Stateless beyond the base URL: calls never touch session state or token
/// persistence, so recording a sign-in is always the caller's explicit step.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiClient {
    /// Build a client against `base_url` (trailing slash optional).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create an account via `POST {base}/auth/signup`.
    ///
    /// The server answers `201 Created` with the new account on success, so
    /// the success check is the whole 2xx range.
    ///
    /// # Errors
    ///
    /// [`ApiError::RequestFailed`] when the server rejects the request (the
    /// message is the server's own, e.g. for a duplicate email),
    /// [`ApiError::Transport`] when no response arrives,
    /// [`ApiError::Encode`]/[`ApiError::Decode`] for body failures, and
    /// [`ApiError::Unavailable`] outside the browser.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = post_credentials(&self.signup_url(), email, password).await?;
            if !(200..300).contains(&resp.status()) {
                return Err(request_failed(resp, SIGN_UP_FALLBACK).await);
            }
            let body: SignUpResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            log::debug!("sign-up accepted for user id={}", body.user.id);
            Ok(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// Sign in via `POST {base}/auth/signin`.
    ///
    /// Success carries the account and a session token. Recording that token
    /// in session state and persisting it are the caller's next steps.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::sign_up`].
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = post_credentials(&self.signin_url(), email, password).await?;
            if !(200..300).contains(&resp.status()) {
                return Err(request_failed(resp, SIGN_IN_FALLBACK).await);
            }
            let body: SignInResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            log::debug!("sign-in accepted for user id={}", body.user.id);
            Ok(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn signup_url(&self) -> String {
        join_url(&self.base_url, SIGNUP_PATH)
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn signin_url(&self) -> String {
        join_url(&self.base_url, SIGNIN_PATH)
    }
}

/// POST the credentials body as JSON and wait for the response.
#[cfg(feature = "hydrate")]
async fn post_credentials(
    url: &str,
    email: &str,
    password: &str,
) -> Result<gloo_net::http::Response, ApiError> {
    let body = Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    gloo_net::http::Request::post(url)
        .json(&body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Turn a non-success response into [`ApiError::RequestFailed`].
#[cfg(feature = "hydrate")]
async fn request_failed(resp: gloo_net::http::Response, fallback: &str) -> ApiError {
    let status = resp.status();
    log::warn!("auth request rejected: status={status}");
    let body = resp.text().await.unwrap_or_default();
    ApiError::RequestFailed {
        status,
        message: failure_message(&body, fallback),
    }
}

/// Extract the display message from a failure body.
///
/// The server sends `{"error": "..."}` with every non-2xx; when the body is
/// missing, malformed, or the field is empty, `fallback` stands in.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(message),
        }) if !message.is_empty() => message,
        _ => fallback.to_owned(),
    }
}

/// Join a base URL and a path with exactly one slash between them.
#[cfg(any(test, feature = "hydrate"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
