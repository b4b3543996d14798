//! Error handling for BrewBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for BrewBuddy application
#[derive(Error, Debug)]
pub enum BrewBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid schedule format: {0}")]
    InvalidScheduleFormat(String),

    #[error("User not found: {target}")]
    UserNotFound { target: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for BrewBuddy operations
pub type Result<T> = std::result::Result<T, BrewBuddyError>;

impl BrewBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            BrewBuddyError::Telegram(_) => true,
            BrewBuddyError::Config(_) => false,
            BrewBuddyError::InvalidScheduleFormat(_) => false,
            BrewBuddyError::UserNotFound { .. } => false,
            BrewBuddyError::Serialization(_) => false,
            BrewBuddyError::Io(_) => true,
            BrewBuddyError::UrlParse(_) => false,
            BrewBuddyError::RateLimitExceeded => true,
            BrewBuddyError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BrewBuddyError::Config(_) => ErrorSeverity::Critical,
            BrewBuddyError::RateLimitExceeded => ErrorSeverity::Warning,
            BrewBuddyError::UserNotFound { .. } => ErrorSeverity::Warning,
            BrewBuddyError::InvalidScheduleFormat(_) => ErrorSeverity::Info,
            BrewBuddyError::InvalidInput(_) => ErrorSeverity::Info,
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
