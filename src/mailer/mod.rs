//! Contact email submission workflow.
//!
//! [`ContactMailer`] runs the precondition checks, builds the provider payload and
//! issues exactly one request per call. Every path ends in an
//! [`EmailDispatchResult`]; nothing is raised to the caller.
//!
//! Calls are blocking. Use [`crate::services::MailServiceImpl`] from async code.

pub mod templates;

use crate::client::EmailTransport;
use crate::config::{Config, OwnerProfile, API_KEY_ENV, DEFAULT_DESTINATION, DEFAULT_FROM};
use crate::domain::{ApiKey, EmailAddress};
use crate::error::MailApiError;
use crate::metrics::Metrics;
use crate::models::{ContactSubmission, EmailDispatchResult, OutboundEmail, ProviderResponse};
use std::sync::Arc;

/// Fixed addressing and template data for outgoing mail.
#[derive(Debug, Clone)]
pub struct MailerSettings {
    /// Sender on every email
    pub from: String,

    /// Owner's own address, destination of contact submissions
    pub destination: String,

    /// Details embedded in the notification template
    pub owner: OwnerProfile,
}

impl MailerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            from: config.from_address.clone(),
            destination: config.destination_email.clone(),
            owner: config.owner.clone(),
        }
    }
}

impl Default for MailerSettings {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            owner: OwnerProfile::default(),
        }
    }
}

/// Sends contact-form submissions and fixed notifications.
///
/// Holds no mutable state; one instance can serve concurrent callers.
/// There is no deduplication: identical calls send identical emails.
pub struct ContactMailer {
    transport: Arc<dyn EmailTransport>,
    credential: Option<ApiKey>,
    settings: MailerSettings,
    metrics: Metrics,
}

impl ContactMailer {
    /// Create a mailer. `credential` is resolved once by the caller at startup.
    pub fn new(
        transport: Arc<dyn EmailTransport>,
        credential: Option<ApiKey>,
        settings: MailerSettings,
    ) -> Self {
        Self {
            transport,
            credential,
            settings,
            metrics: Metrics::new(),
        }
    }

    /// Share a metrics collector with other components.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Deliver a contact-form submission to the owner.
    ///
    /// Checks, in order: credential, required text fields, sender address.
    /// The first failing check decides the result and no request is made.
    pub fn send_contact_email(&self, submission: &ContactSubmission) -> EmailDispatchResult {
        let Some(api_key) = self.credential.as_ref() else {
            return self.reject_unconfigured();
        };

        if let Err(e) = submission.validate() {
            tracing::info!("Contact submission rejected: {}", e);
            self.metrics.record_dispatch_rejected();
            return EmailDispatchResult::validation_error(&e);
        }

        let email = OutboundEmail {
            from: self.settings.from.clone(),
            to: vec![self.settings.destination.clone()],
            subject: submission.subject.clone(),
            html: templates::contact_html(submission),
            text: None,
        };

        tracing::info!(
            "Sending contact email: subject_len={}, body_len={}, has_phone={}",
            submission.subject.len(),
            submission.body.len(),
            submission.phone().is_some()
        );
        self.dispatch(api_key, &email)
    }

    /// Send the predetermined notification to `recipient`.
    ///
    /// Checks, in order: credential, recipient address.
    pub fn send_fixed_notification(&self, recipient: &str) -> EmailDispatchResult {
        let Some(api_key) = self.credential.as_ref() else {
            return self.reject_unconfigured();
        };

        let recipient = match EmailAddress::parse(recipient) {
            Ok(address) => address,
            Err(e) => {
                tracing::info!("Notification rejected: {}", e);
                self.metrics.record_dispatch_rejected();
                return EmailDispatchResult::validation_error(&e);
            }
        };

        let owner = &self.settings.owner;
        let email = OutboundEmail {
            from: self.settings.from.clone(),
            to: vec![recipient.into_inner()],
            subject: templates::notification_subject(owner),
            html: templates::notification_html(owner),
            text: Some(templates::notification_text(owner)),
        };

        tracing::info!("Sending notification email");
        self.dispatch(api_key, &email)
    }

    fn reject_unconfigured(&self) -> EmailDispatchResult {
        tracing::warn!("{} is not set; email not sent", API_KEY_ENV);
        self.metrics.record_dispatch_rejected();
        EmailDispatchResult::configuration_error(API_KEY_ENV)
    }

    /// One request, classified. Never retried.
    fn dispatch(&self, api_key: &ApiKey, email: &OutboundEmail) -> EmailDispatchResult {
        match self.transport.send(email, api_key) {
            Ok(reply) if (200..300).contains(&reply.status) => {
                tracing::info!("Email accepted by provider (status: {})", reply.status);
                self.metrics.record_email_sent();
                EmailDispatchResult::success(reply)
            }
            // Transports should not do this, but a stray non-2xx is still a rejection
            Ok(reply) => {
                tracing::warn!("Provider returned non-2xx: {}", reply.status);
                EmailDispatchResult::provider_rejected(reply.status, reply.body)
            }
            Err(MailApiError::ApiError { status, body }) => {
                tracing::warn!("Provider returned non-2xx: {}", status);
                EmailDispatchResult::provider_rejected(status, ProviderResponse::from_body(&body))
            }
            Err(e) => {
                tracing::error!("Error while sending email: {}", e);
                EmailDispatchResult::transport_error(e)
            }
        }
    }
}
