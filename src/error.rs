// src/error.rs

//! Unified error handling for the monitor.

use std::fmt;

use thiserror::Error;

/// Result type alias for monitor operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Page fetch failed (transport error or non-success status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Watchlist or settings problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required secret is missing
    #[error("Credential error: {0}")]
    Credential(String),

    /// Building or submitting the alert email failed
    #[error("Mail error: {0}")]
    Mail(String),
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a credential error for a missing environment variable.
    pub fn missing_env(name: &str) -> Self {
        Self::Credential(format!("Missing required environment variable: {name}"))
    }

    /// Create a mail error.
    pub fn mail(message: impl fmt::Display) -> Self {
        Self::Mail(message.to_string())
    }

    /// Whether this error came from fetching a page.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Process exit code for this error: 2 for network failures, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_network() { 2 } else { 1 }
    }
}

impl From<lettre::address::AddressError> for AppError {
    fn from(e: lettre::address::AddressError) -> Self {
        Self::mail(format!("invalid address: {e}"))
    }
}

impl From<lettre::error::Error> for AppError {
    fn from(e: lettre::error::Error) -> Self {
        Self::mail(e)
    }
}

impl From<lettre::transport::smtp::Error> for AppError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        Self::mail(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::config("empty watchlist").exit_code(), 1);
        assert_eq!(AppError::Io(std::io::Error::other("disk")).exit_code(), 1);
        assert_eq!(AppError::missing_env("GMAIL_USERNAME").exit_code(), 1);
        assert_eq!(AppError::mail("boom").exit_code(), 1);
    }

    #[test]
    fn test_missing_env_message() {
        let err = AppError::missing_env("GMAIL_APP_PASSWORD");
        assert_eq!(
            err.to_string(),
            "Credential error: Missing required environment variable: GMAIL_APP_PASSWORD"
        );
    }
}
