//! Error type for the authentication API client.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by [`ApiClient`](crate::api::ApiClient) calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// `Display` for this variant is the bare message, which is the server's
    /// own `error` string when the failure body carried one, so callers can
    /// show it to the user directly.
    #[error("{message}")]
    RequestFailed {
        /// HTTP status the server answered with.
        status: u16,
        /// Server-provided reason, or a generic per-operation fallback.
        message: String,
    },
    /// The request never produced a response (DNS failure, refused
    /// connection, dropped socket).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// A success response carried a body that does not match the expected
    /// shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// Browser networking is not compiled into this build.
    #[error("not available outside the browser")]
    Unavailable,
}
