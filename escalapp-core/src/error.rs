use thiserror::Error;

/// Failure taxonomy for every operation against the admin_ws backend.
///
/// Nothing here is fatal to the process; every variant resolves to a UI state
/// and/or a redirect in the embedding application.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Local field-level validation failure; never reached the network.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Wrong credentials at login; carries the server-provided message.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Expired or invalid credential on an authenticated call. The session
    /// has already been cleared by the time the caller sees this.
    #[error("Session expired or not authorized")]
    Unauthorized,

    /// Server rejected the request but the caller can fix and resubmit,
    /// e.g. a wrong or expired password-reset code.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The server answered with something other than the expected
    /// `{success, message, data?}` envelope.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Network-level failure; generic and retryable.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Failures the caller can correct and resubmit.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ApiError::Validation(_) | ApiError::Authentication(_) | ApiError::Rejected(_)
        )
    }

    /// Transient failures worth retrying unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
