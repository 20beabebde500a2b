//! EmailAddress value object and the lenient address check used as a UX gate.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// An email address parsed from free text.
///
/// Parsing accepts both bare addresses and the `Display Name <address>` form.
/// The rules are intentionally loose: the only hard requirement is an `@` in the
/// address part. No RFC 5322 grammar and no DNS lookups.
///
/// # Example
///
/// ```
/// use contact_mail_mcp_server::domain::EmailAddress;
///
/// let email = EmailAddress::parse("Ravi <ravi@example.com>").unwrap();
/// assert_eq!(email.as_str(), "ravi@example.com");
/// assert_eq!(email.display_name(), Some("Ravi"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    display_name: Option<String>,
    address: String,
}

impl EmailAddress {
    /// Parse a candidate string into an address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if no address containing `@` can be
    /// extracted, or the whole input is a lone `@`.
    pub fn parse(candidate: &str) -> Result<Self, ValidationError> {
        let trimmed = candidate.trim();
        let invalid = || ValidationError::InvalidEmail(candidate.to_string());

        // In `Name <addr>` form only the bracketed part counts
        if let Some((display_name, address)) = Self::split_angle_form(trimmed) {
            if !address.contains('@') {
                return Err(invalid());
            }
            return Ok(Self {
                display_name,
                address,
            });
        }

        if trimmed == "@" || !trimmed.contains('@') {
            return Err(invalid());
        }

        Ok(Self {
            display_name: None,
            address: trimmed.to_string(),
        })
    }

    /// Split `Name <addr>` into its parts. Returns `None` unless the input ends
    /// with a bracketed section.
    fn split_angle_form(input: &str) -> Option<(Option<String>, String)> {
        let body = input.strip_suffix('>')?;
        let open = body.rfind('<')?;
        let address = body[open + 1..].trim().to_string();

        let name = body[..open].trim().trim_matches('"').trim();
        let display_name = (!name.is_empty()).then(|| name.to_string());

        Some((display_name, address))
    }

    /// Get the bare address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Display name given in front of `<...>`, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Convert into the bare address.
    pub fn into_inner(self) -> String {
        self.address
    }
}

/// Decide whether `candidate` is an acceptable email address.
///
/// Pure and permissive; see [`EmailAddress::parse`].
pub fn is_valid_email(candidate: &str) -> bool {
    EmailAddress::parse(candidate).is_ok()
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.address.serialize(serializer)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}
