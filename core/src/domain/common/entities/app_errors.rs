use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The AI service call itself failed: network, auth, quota, non-2xx status.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// The AI service answered but without any text content.
    #[error("No response content from the AI service")]
    EmptyResponse,

    /// The returned text did not parse into the declared response shape.
    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    #[error("Invalid profile: {0}")]
    Validation(String),

    #[error("Profile storage error: {0}")]
    StorageError(String),

    #[error("An active profile is required")]
    ProfileRequired,

    #[error("A request is already in flight")]
    RequestInFlight,

    #[error("The previous request failed; retry it first")]
    RetryRequired,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// True for the failures that come from talking to the AI service.
    pub fn is_gateway_failure(&self) -> bool {
        matches!(
            self,
            CoreError::ExternalServiceError(_)
                | CoreError::EmptyResponse
                | CoreError::MalformedResponse(_)
        )
    }
}
