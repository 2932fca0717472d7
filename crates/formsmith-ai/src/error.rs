use thiserror::Error;

/// Errors raised by the AI generation boundary.
#[derive(Debug, Error)]
pub enum AiError {
    /// Provider-specific failure (request rejected, transport error).
    #[error("provider error: {0}")]
    Provider(String),
    /// The completion came back with no content.
    #[error("no content received from model")]
    EmptyCompletion,
    /// The completion text was not parseable JSON.
    #[error("model returned invalid json: {0}")]
    InvalidJson(serde_json::Error),
    /// Client construction problems such as a missing API key.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl AiError {
    /// Create a provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
