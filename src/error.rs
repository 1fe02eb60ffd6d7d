use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Failures a scenario can hit before or while sending its request.
///
/// An HTTP error status is not in this list: whatever the server answers
/// is handed back to the caller untouched.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] validator::ValidationErrors),
}

impl ScenarioError {
    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ScenarioError::Client(_) => "Client",
            ScenarioError::Transport(e) if e.is_timeout() => "Timeout",
            ScenarioError::Transport(e) if e.is_connect() => "Connect",
            ScenarioError::Transport(_) => "Transport",
            ScenarioError::Encode(_) => "Encode",
            ScenarioError::InvalidPayload(_) => "InvalidPayload",
        }
    }
}
