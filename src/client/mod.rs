//! HTTP client for the Resend transactional email API.
//!
//! This module provides a synchronous HTTP client that is driven from async contexts
//! via `tokio::task::spawn_blocking` (see [`crate::services`]). The client handles
//! authentication, status mapping and body decoding. It never retries.

use crate::config::Config;
use crate::domain::ApiKey;
use crate::error::{MailApiError, MailApiResult};
use crate::metrics::Metrics;
use crate::models::{OutboundEmail, ProviderReply, ProviderResponse};
use std::sync::Arc;
use std::time::Duration;

/// Anything that can deliver an [`OutboundEmail`] to the provider.
///
/// Implementations perform exactly one request per call. Any answer outside 2xx
/// is reported as [`MailApiError::ApiError`], so `Ok` always carries a 2xx reply.
pub trait EmailTransport: Send + Sync {
    fn send(&self, email: &OutboundEmail, api_key: &ApiKey) -> MailApiResult<ProviderReply>;
}

/// HTTP client for the Resend email API.
///
/// This client uses `ureq` for synchronous HTTP requests with a bounded
/// per-request timeout.
#[derive(Clone)]
pub struct ResendClient {
    /// Full endpoint URL for sending an email
    api_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ResendClient {
    /// Create a new ResendClient from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            api_url: config.api_url.clone(),
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Create a ResendClient with a custom endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(api_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(15))
            .build();

        Self {
            api_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, body: &serde_json::Value, api_key: &ApiKey) -> MailApiResult<ureq::Response> {
        tracing::debug!("POST {}", self.api_url);

        self.agent
            .post(&self.api_url)
            .set("Authorization", &api_key.bearer())
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e))
    }

    /// Map a ureq error to a MailApiError.
    fn map_error(&self, error: ureq::Error) -> MailApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                MailApiError::ApiError { status, body }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed => {
                    MailApiError::HttpError(format!("Connection failed: {}", transport))
                }
                ureq::ErrorKind::Io if Self::is_timeout(&transport) => {
                    MailApiError::Timeout(transport.to_string())
                }
                _ => MailApiError::HttpError(transport.to_string()),
            },
        }
    }

    /// Socket read/write timeouts surface as `TimedOut` or `WouldBlock`.
    fn is_timeout(transport: &ureq::Transport) -> bool {
        std::error::Error::source(transport)
            .and_then(|source| source.downcast_ref::<std::io::Error>())
            .map(|io| {
                matches!(
                    io.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                )
            })
            .unwrap_or(false)
    }

    /// Read the body and keep only 2xx answers.
    fn read_reply(response: ureq::Response) -> MailApiResult<ProviderReply> {
        let status = response.status();

        let raw = response
            .into_string()
            .map_err(|e| MailApiError::HttpError(format!("Unreadable response: {}", e)))?;

        // ureq only errors on 4xx/5xx; anything else outside 2xx is still a rejection
        if !(200..300).contains(&status) {
            return Err(MailApiError::ApiError { status, body: raw });
        }

        Ok(ProviderReply {
            status,
            body: ProviderResponse::from_body(&raw),
        })
    }
}

impl EmailTransport for ResendClient {
    fn send(&self, email: &OutboundEmail, api_key: &ApiKey) -> MailApiResult<ProviderReply> {
        let body = serde_json::to_value(email)?;

        let timer = self.metrics.time_request();
        let result = self.post(&body, api_key).and_then(Self::read_reply);

        match &result {
            Ok(reply) => {
                tracing::debug!("POST {} - Success (status: {})", self.api_url, reply.status);
                timer.finish(true);
            }
            Err(e) => {
                tracing::warn!("POST {} - Error: {}", self.api_url, e);
                timer.finish(false);
            }
        }

        result
    }
}
