use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Unreachable host, timeout, or a non-2xx status with no usable body.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered `success: false`. Carries its message, possibly blank.
    #[error("API error: {0}")]
    Application(String),

    /// A 2xx response whose body is not the expected envelope.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show the user: the API's own message when it sent one,
    /// `fallback` for everything else.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Application(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}
