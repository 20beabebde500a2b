//! MCP tool handlers for the contact mail server.
//!
//! This module implements the email tools using the rmcp SDK's tool_router pattern.
//! Dispatch failures are returned as tool output, never as protocol errors.

use crate::services::MailService;
use crate::tools::{SendContactEmailParams, SendNotificationParams, ToolReply};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes the contact-form and notification tools.
#[derive(Clone)]
pub struct ContactMailMcpServer {
    mail_service: Arc<dyn MailService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactMailMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact-form mail server. Collect name, subject, sender email, message and optional phone, show the user a one-line summary, and call send_contact_email_tool only after an explicit yes. Each call sends one email; repeated calls send duplicates.".into()),
        }
    }
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn reply_content(reply: &ToolReply) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(reply).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

// Tool router implementation
#[tool_router]
impl ContactMailMcpServer {
    /// Create a new contact mail MCP server.
    pub fn new(mail_service: Arc<dyn MailService>) -> Self {
        Self {
            mail_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Send a contact-form message to the owner.
    #[tool(
        description = "Send a contact-form message to the site owner. Requires name, subject, sender email and message body; phone is optional. Call only once per user-confirmed message: every call sends an email."
    )]
    async fn send_contact_email_tool(
        &self,
        params: Parameters<SendContactEmailParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: send_contact_email_tool called");
        tracing::debug!(
            "Parameters: name_len={}, subject_len={}, body_len={}, has_phone={}",
            params.name.len(),
            params.subject.len(),
            params.body.len(),
            params.phone.is_some()
        );

        let result = self.mail_service.send_contact_email(params.into()).await;
        tracing::info!("Contact email outcome: {:?}", result.outcome);

        reply_content(&ToolReply::from(result))
    }

    /// Send the fixed notification email to a recipient.
    #[tool(
        description = "Send a short, predetermined thank-you email with the owner's resume and profile links to the given address. Only the recipient email is needed."
    )]
    async fn send_notification_email_tool(
        &self,
        params: Parameters<SendNotificationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: send_notification_email_tool called");

        let result = self.mail_service.send_notification(params.email).await;
        tracing::info!("Notification outcome: {:?}", result.outcome);

        reply_content(&ToolReply::from(result))
    }
}
