//! Error classification and recovery.

use strum::Display;

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    Configuration,
    Network,
    Authentication,
    Malformed,
    Server,
    Timeout,
    Io,
    Unknown,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    CheckCredentials,
    CheckConfiguration,
    CheckRequest,
    CheckLocalFiles,
    TryAgainLater,
    ContactSupport,
}

impl RecoverySuggestion {
    /// One-line hint printed next to a failure.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::CheckCredentials => "check that CONTEXTUAL_API_KEY is valid",
            Self::CheckConfiguration => "check your .env file and command-line arguments",
            Self::CheckRequest => "check the agent/datastore ids and request contents",
            Self::CheckLocalFiles => "check that the files exist and are readable",
            Self::TryAgainLater => "the service may be temporarily unavailable; try again",
            Self::ContactSupport => "see https://app.contextual.ai for service status",
        }
    }
}
