//! Mail service layer.
//!
//! Async facade over the blocking [`ContactMailer`]. Each call runs on Tokio's
//! blocking pool via `tokio::task::spawn_blocking`, so the MCP runtime never
//! stalls on the provider request.

use crate::mailer::ContactMailer;
use crate::models::{ContactSubmission, EmailDispatchResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Mail service trait for tool handlers.
#[async_trait]
pub trait MailService: Send + Sync {
    /// Deliver a contact-form submission to the owner.
    async fn send_contact_email(&self, submission: ContactSubmission) -> EmailDispatchResult;

    /// Send the fixed notification email to `recipient`.
    async fn send_notification(&self, recipient: String) -> EmailDispatchResult;
}

/// Default implementation of MailService.
#[derive(Clone)]
pub struct MailServiceImpl {
    mailer: Arc<ContactMailer>,
}

impl MailServiceImpl {
    /// Create a new mail service.
    pub fn new(mailer: ContactMailer) -> Self {
        Self {
            mailer: Arc::new(mailer),
        }
    }

    pub fn mailer(&self) -> &ContactMailer {
        &self.mailer
    }
}

#[async_trait]
impl MailService for MailServiceImpl {
    async fn send_contact_email(&self, submission: ContactSubmission) -> EmailDispatchResult {
        let mailer = self.mailer.clone();

        tokio::task::spawn_blocking(move || mailer.send_contact_email(&submission))
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Contact email task failed: {}", e);
                EmailDispatchResult::transport_error(format!("Task join error: {}", e))
            })
    }

    async fn send_notification(&self, recipient: String) -> EmailDispatchResult {
        let mailer = self.mailer.clone();

        tokio::task::spawn_blocking(move || mailer.send_fixed_notification(&recipient))
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Notification task failed: {}", e);
                EmailDispatchResult::transport_error(format!("Task join error: {}", e))
            })
    }
}
