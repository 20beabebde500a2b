//! Email tool parameters and the reply mapping handed back to the agent runtime.

use crate::models::{ContactSubmission, DispatchOutcome, EmailDispatchResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments of the contact-form tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SendContactEmailParams {
    /// Sender's name
    pub name: String,
    /// Email subject
    pub subject: String,
    /// Sender's email address
    pub email: String,
    /// Message body (plain text)
    pub body: String,
    /// Optional phone number
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<SendContactEmailParams> for ContactSubmission {
    fn from(params: SendContactEmailParams) -> Self {
        ContactSubmission {
            name: params.name,
            subject: params.subject,
            sender_email: params.email,
            body: params.body,
            phone: params.phone,
        }
    }
}

/// Arguments of the notification tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SendNotificationParams {
    /// Recipient email address
    pub email: String,
}

/// Coarse status the agent runtime branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

/// Mapping returned by both email tools.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolReply {
    pub status: ToolStatus,
    pub message: String,
    pub outcome: DispatchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_count: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl From<EmailDispatchResult> for ToolReply {
    fn from(result: EmailDispatchResult) -> Self {
        let success = result.is_success();
        ToolReply {
            status: if success {
                ToolStatus::Success
            } else {
                ToolStatus::Error
            },
            message: result.detail,
            outcome: result.outcome,
            response: result.provider_response.map(|r| r.to_value()),
            status_code: result.http_status,
            results_count: success.then_some(1),
            fields: result.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::models::{ProviderReply, ProviderResponse};
    use serde_json::json;

    #[test]
    fn test_params_into_submission() {
        let params: SendContactEmailParams = serde_json::from_value(json!({
            "name": "Ravi",
            "subject": "Hi",
            "email": "pari@example.com",
            "body": "Hello Uday!"
        }))
        .unwrap();
        let submission = ContactSubmission::from(params);
        assert_eq!(submission.sender_email, "pari@example.com");
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn test_success_reply() {
        let reply = ToolReply::from(EmailDispatchResult::success(ProviderReply {
            status: 200,
            body: ProviderResponse::Json(json!({"id": "abc"})),
        }));
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "email sent");
        assert_eq!(value["response"]["id"], "abc");
        assert_eq!(value["status_code"], 200);
        assert_eq!(value["results_count"], 1);
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn test_error_reply_omits_results_count() {
        let err = ValidationError::MissingFields(vec!["subject"]);
        let reply = ToolReply::from(EmailDispatchResult::validation_error(&err));
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["outcome"], "validation_error");
        assert_eq!(value["fields"], json!(["subject"]));
        assert!(value.get("results_count").is_none());
        assert!(value.get("status_code").is_none());
    }

    #[test]
    fn test_rejected_reply_keeps_status_code() {
        let reply = ToolReply::from(EmailDispatchResult::provider_rejected(
            500,
            ProviderResponse::Text("oops".to_string()),
        ));
        assert_eq!(reply.status, ToolStatus::Error);
        assert_eq!(reply.status_code, Some(500));
        assert_eq!(reply.response, Some(json!("oops")));
    }
}
