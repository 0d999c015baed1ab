//! Error handling for SportClub
//!
//! This module defines the main error types used throughout the client
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the SportClub client
#[derive(Error, Debug)]
pub enum SportClubError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with `success: false`; carries its `error` string verbatim
    #[error("{0}")]
    Api(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for SportClub operations
pub type Result<T> = std::result::Result<T, SportClubError>;

impl SportClubError {
    /// Build an application-level failure from an optional server message
    pub fn api(message: Option<String>) -> Self {
        SportClubError::Api(message.unwrap_or_default())
    }

    /// Transport-level failures get a generic user-facing message, everything
    /// else is surfaced with its own text
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SportClubError::Http(_)
                | SportClubError::InvalidResponse(_)
                | SportClubError::Serialization(_)
                | SportClubError::Io(_)
                | SportClubError::UrlParse(_)
        )
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SportClubError::Config(_) => ErrorSeverity::Critical,
            SportClubError::Api(_) => ErrorSeverity::Warning,
            SportClubError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
