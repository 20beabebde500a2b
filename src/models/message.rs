//! Outbound email payload, shaped the way the provider expects it.

use serde::{Deserialize, Serialize};

/// Request body for a single provider send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    /// Sender, may use the `Name <addr>` form
    pub from: String,

    /// Recipients (always one here)
    pub to: Vec<String>,

    pub subject: String,

    pub html: String,

    /// Plain-text alternative, omitted from the JSON when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
