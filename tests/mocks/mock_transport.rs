use contact_mail_mcp_server::domain::ApiKey;
use contact_mail_mcp_server::error::{MailApiError, MailApiResult};
use contact_mail_mcp_server::models::{OutboundEmail, ProviderReply, ProviderResponse};
use contact_mail_mcp_server::EmailTransport;
use std::sync::{Arc, Mutex};

/// What the mock answers on every call.
#[allow(dead_code)]
#[derive(Clone)]
pub enum MockAnswer {
    /// Provider answered with this status and raw body
    Status(u16, String),
    /// Connection could not be established
    ConnectionFailed,
    /// Request timed out
    Timeout,
}

/// Mock transport recording every request it receives.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockTransport {
    answer: MockAnswer,
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    keys: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new(answer: MockAnswer) -> Self {
        Self {
            answer,
            sent: Arc::new(Mutex::new(Vec::new())),
            keys: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(MockAnswer::Status(status, body.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_sent(&self) -> Option<OutboundEmail> {
        self.sent.lock().unwrap().last().cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

impl EmailTransport for MockTransport {
    fn send(&self, email: &OutboundEmail, api_key: &ApiKey) -> MailApiResult<ProviderReply> {
        self.sent.lock().unwrap().push(email.clone());
        self.keys.lock().unwrap().push(api_key.expose().to_string());

        match &self.answer {
            MockAnswer::Status(status, body) if (200..300).contains(status) => Ok(ProviderReply {
                status: *status,
                body: ProviderResponse::from_body(body),
            }),
            MockAnswer::Status(status, body) => Err(MailApiError::ApiError {
                status: *status,
                body: body.clone(),
            }),
            MockAnswer::ConnectionFailed => Err(MailApiError::HttpError(
                "Connection failed: connection refused".to_string(),
            )),
            MockAnswer::Timeout => Err(MailApiError::Timeout(
                "timed out reading response".to_string(),
            )),
        }
    }
}
