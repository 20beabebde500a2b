//! Error types for the Contact Mail MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! None of these ever reach the agent runtime directly: dispatch failures are folded
//! into an [`EmailDispatchResult`](crate::models::EmailDispatchResult) first.

use thiserror::Error;

/// Errors that can occur when talking to the email provider.
#[derive(Error, Debug)]
pub enum MailApiError {
    /// HTTP request failed before a status was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider answered with a non-success status code
    #[error("API error (status {status}): {body}")]
    ApiError { status: u16, body: String },

    /// Failed to encode the request payload
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// No answer within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),
}

impl MailApiError {
    /// HTTP status carried by the error, if the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with MailApiError
pub type MailApiResult<T> = Result<T, MailApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
