pub mod mock_transport;

pub use mock_transport::{MockAnswer, MockTransport};

use contact_mail_mcp_server::{ApiKey, ContactMailer, MailerSettings};
use std::sync::Arc;

#[allow(dead_code)]
pub const TEST_KEY: &str = "re_test_key";

/// Mailer wired to `transport`, with a key unless `with_key` is false.
#[allow(dead_code)]
pub fn mailer_with(transport: &MockTransport, with_key: bool) -> ContactMailer {
    let credential = if with_key { ApiKey::new(TEST_KEY) } else { None };
    ContactMailer::new(
        Arc::new(transport.clone()),
        credential,
        MailerSettings::default(),
    )
}
