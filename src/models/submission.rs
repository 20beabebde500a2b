//! Contact-form submission model.

use crate::domain::{EmailAddress, ValidationError};
use serde::{Deserialize, Serialize};

/// One contact-form submission, as collected by the agent runtime.
///
/// Created per send attempt and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Sender's name
    pub name: String,

    /// Email subject, used verbatim
    pub subject: String,

    /// Sender's email address (free text, validated leniently)
    pub sender_email: String,

    /// Message body, plain text
    pub body: String,

    /// Optional phone number
    #[serde(default)]
    pub phone: Option<String>,
}

impl ContactSubmission {
    /// Create a submission without a phone number.
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        sender_email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            sender_email: sender_email.into(),
            body: body.into(),
            phone: None,
        }
    }

    /// Attach a phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Phone number, if one was given and is not blank.
    pub fn phone(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Required text fields that are empty or whitespace-only, in input order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("subject", &self.subject),
            ("body", &self.body),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check required fields, then the sender address.
    ///
    /// Returns the parsed sender address on success.
    pub fn validate(&self) -> Result<EmailAddress, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        EmailAddress::parse(&self.sender_email)
    }
}
