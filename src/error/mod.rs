//! Error types for MedAssist.

pub mod unified;

pub use unified::{ErrorCategory, RecoverySuggestion};

use thiserror::Error;

/// Primary error type for all MedAssist operations.
#[derive(Error, Debug)]
pub enum MedAssistError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl MedAssistError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::Network(e) if e.is_decode() => ErrorCategory::Malformed,
            Self::Network(e) if e.is_timeout() => ErrorCategory::Timeout,
            Self::Network(_) => ErrorCategory::Network,
            Self::Serialization(_) | Self::InvalidArgument(_) => ErrorCategory::Malformed,
            Self::Io(_) => ErrorCategory::Io,
            Self::NotFound(_) => ErrorCategory::Malformed,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                408 | 504 => ErrorCategory::Timeout,
                500..=599 => ErrorCategory::Server,
                400..=499 => ErrorCategory::Malformed,
                _ => ErrorCategory::Unknown,
            },
        }
    }

    /// Whether the same call might succeed if issued again later.
    pub fn is_transient(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Timeout | ErrorCategory::Server
        )
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self.category() {
            ErrorCategory::Authentication => RecoverySuggestion::CheckCredentials,
            ErrorCategory::Configuration => RecoverySuggestion::CheckConfiguration,
            ErrorCategory::Network | ErrorCategory::Server | ErrorCategory::Timeout => {
                RecoverySuggestion::TryAgainLater
            }
            ErrorCategory::Malformed => RecoverySuggestion::CheckRequest,
            ErrorCategory::Io => RecoverySuggestion::CheckLocalFiles,
            ErrorCategory::Unknown => RecoverySuggestion::ContactSupport,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MedAssistError>;
