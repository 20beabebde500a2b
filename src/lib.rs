//! Contact Mail MCP Server - contact-form and notification email tools for an agent runtime.
//!
//! The agent runtime collects the contact fields conversationally, asks the user
//! to confirm, then calls one of the tools exposed here. Each call validates its
//! input again, sends exactly one email through the Resend HTTP API and returns a
//! structured status. Failures are data, never faults.
//!
//! # Architecture
//!
//! - **domain**: Email address parsing and the provider credential
//! - **models**: Submissions, outbound payloads and dispatch results
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP transport for the email provider
//! - **mailer**: The submission workflow and email templates
//! - **services**: Async facade used by the MCP handlers
//! - **tools**: Tool parameters and reply mapping
//! - **server**: MCP protocol server
//! - **metrics**: Request and dispatch counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod mailer;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;
pub mod tools;

pub use client::{EmailTransport, ResendClient};
pub use config::{Config, OwnerProfile};
pub use domain::{is_valid_email, ApiKey, EmailAddress, ValidationError};
pub use error::{ConfigError, MailApiError};
pub use mailer::{ContactMailer, MailerSettings};
pub use metrics::{Metrics, MetricsSummary, RequestTimer};
pub use models::{
    ContactSubmission, DispatchOutcome, EmailDispatchResult, OutboundEmail, ProviderReply,
    ProviderResponse,
};
pub use server::ContactMailMcpServer;
pub use services::{MailService, MailServiceImpl};
pub use tools::{SendContactEmailParams, SendNotificationParams, ToolReply, ToolStatus};
