use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single design generation request.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Validation(String),
    #[error("invalid image: {0}")]
    ImageDecode(String),
    #[error("API Error: {0}")]
    ExternalService(#[from] ExternalServiceError),
    #[error("failed to persist {0}")]
    Persistence(String),
    #[error("{0}")]
    Internal(String),
}

impl GenerationError {
    /// Whether the caller sent something unusable, as opposed to a server side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::ImageDecode(_))
    }
}

/// Errors reported by the image editing service, relabelled for end users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternalServiceError {
    #[error(
        "Rate limit exceeded or insufficient credits. Please check your OpenAI account billing status and try again later."
    )]
    RateLimited,
    #[error("Invalid API key. Please check your OpenAI API key configuration.")]
    InvalidCredentials,
    #[error("Invalid request. Please try again with different parameters.")]
    InvalidRequest,
    #[error("{0}")]
    Unknown(String),
}

impl ExternalServiceError {
    /// Maps a raw service error message onto a known category. First match wins.
    pub fn classify(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        if lowered.contains("rate_limit") {
            Self::RateLimited
        } else if lowered.contains("invalid_api_key") {
            Self::InvalidCredentials
        } else if lowered.contains("invalid_request_error") {
            Self::InvalidRequest
        } else {
            Self::Unknown(raw.to_string())
        }
    }
}

/// A staged file that could not be removed. Only ever logged.
#[derive(Debug, Error)]
#[error("failed to remove staged file {}: {source}", .path.display())]
pub struct CleanupError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
