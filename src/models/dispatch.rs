//! Dispatch outcome model.
//!
//! Every send attempt ends in exactly one [`EmailDispatchResult`]. Failures are
//! data here, so callers can always produce a graceful message.

use crate::domain::ValidationError;
use serde::Serialize;
use serde_json::Value;

/// Classification of a dispatch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// Provider accepted the email (2xx)
    Success,
    /// Bad or missing input; the user can fix it
    ValidationError,
    /// Missing credential; the operator has to fix it
    ConfigurationError,
    /// Network failure or provider rejection; worth retrying later
    TransportError,
}

/// Body returned by the provider: JSON when it parses, raw text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProviderResponse {
    Json(Value),
    Text(String),
}

impl ProviderResponse {
    /// Interpret a raw response body.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => ProviderResponse::Json(value),
            Err(_) => ProviderResponse::Text(body.to_string()),
        }
    }

    /// Look up a top-level member of a JSON object body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            ProviderResponse::Json(value) => value.get(key),
            ProviderResponse::Text(_) => None,
        }
    }

    /// Convert into a JSON value (text bodies become strings).
    pub fn to_value(&self) -> Value {
        match self {
            ProviderResponse::Json(value) => value.clone(),
            ProviderResponse::Text(text) => Value::String(text.clone()),
        }
    }
}

/// A provider answer: HTTP status and decoded body.
///
/// [`EmailTransport`](crate::client::EmailTransport) implementations return these
/// only for 2xx statuses; other statuses travel as `MailApiError::ApiError`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReply {
    pub status: u16,
    pub body: ProviderResponse,
}

/// Result of one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailDispatchResult {
    pub outcome: DispatchOutcome,
    pub detail: String,
    pub provider_response: Option<ProviderResponse>,
    pub http_status: Option<u16>,
    /// Offending input fields for validation outcomes
    pub fields: Vec<String>,
}

impl EmailDispatchResult {
    pub fn success(reply: ProviderReply) -> Self {
        Self {
            outcome: DispatchOutcome::Success,
            detail: "email sent".to_string(),
            provider_response: Some(reply.body),
            http_status: Some(reply.status),
            fields: Vec::new(),
        }
    }

    pub fn validation_error(error: &ValidationError) -> Self {
        Self {
            outcome: DispatchOutcome::ValidationError,
            detail: error.to_string(),
            provider_response: None,
            http_status: None,
            fields: error.fields(),
        }
    }

    pub fn configuration_error(missing_var: &str) -> Self {
        Self {
            outcome: DispatchOutcome::ConfigurationError,
            detail: format!("missing {}", missing_var),
            provider_response: None,
            http_status: None,
            fields: Vec::new(),
        }
    }

    /// Provider answered, but not with 2xx.
    pub fn provider_rejected(status: u16, response: ProviderResponse) -> Self {
        Self {
            outcome: DispatchOutcome::TransportError,
            detail: "provider rejected request".to_string(),
            provider_response: Some(response),
            http_status: Some(status),
            fields: Vec::new(),
        }
    }

    /// The request never produced a usable answer.
    pub fn transport_error(cause: impl std::fmt::Display) -> Self {
        Self {
            outcome: DispatchOutcome::TransportError,
            detail: format!("request failed: {}", cause),
            provider_response: None,
            http_status: None,
            fields: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == DispatchOutcome::Success
    }
}
