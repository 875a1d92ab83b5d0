//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Non-2xx responses are split by status class so callers can react to
/// authentication failures, missing resources, and state conflicts without
/// inspecting raw status codes.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The backend rejected the request as malformed (400, 422, and other 4xx).
    #[error("Validation failed with status {status}: {message}")]
    Validation { status: u16, message: String },
    /// Missing or rejected credentials (401/403). Callers should re-authenticate.
    #[error("Authentication failed with status {status}: {message}")]
    Auth { status: u16, message: String },
    /// The requested resource does not exist (404).
    #[error("Resource not found: {message}")]
    NotFound { message: String },
    /// The request conflicts with current server-side state (409), e.g.
    /// approving a withdrawal that is no longer pending.
    #[error("Conflict: {message}")]
    Conflict { message: String },
    /// The backend failed (5xx). Retryable by the caller, not automatically.
    #[error("Server error with status {status}: {message}")]
    Server { status: u16, message: String },
    /// The transport failed before any response was received.
    #[error("Network error")]
    Network(#[from] reqwest::Error),
    /// The response body could not be parsed as the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The base URL or path produced an invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
