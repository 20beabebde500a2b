//! Fixed notification email against a recording mock transport.

mod mocks;

use contact_mail_mcp_server::{
    ApiKey, ContactMailer, DispatchOutcome, MailerSettings, OwnerProfile,
};
use mocks::{mailer_with, MockAnswer, MockTransport};
use std::sync::Arc;

#[test]
fn test_notification_success() {
    let transport = MockTransport::replying(202, r#"{"id": "n-1"}"#);
    let mailer = mailer_with(&transport, true);

    let result = mailer.send_fixed_notification("user@example.com");
    assert_eq!(result.outcome, DispatchOutcome::Success);
    assert_eq!(result.http_status, Some(202));
    assert_eq!(transport.call_count(), 1);

    let sent = transport.last_sent().unwrap();
    assert_eq!(sent.to, vec!["user@example.com"]);
    assert!(sent.text.is_some());
    assert!(!sent.html.is_empty());
}

#[test]
fn test_notification_invalid_recipient() {
    let transport = MockTransport::replying(202, "{}");
    let mailer = mailer_with(&transport, true);

    let result = mailer.send_fixed_notification("bad");
    assert_eq!(result.outcome, DispatchOutcome::ValidationError);
    assert_eq!(result.fields, vec!["email"]);
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn test_notification_credential_checked_first() {
    let transport = MockTransport::replying(202, "{}");
    let mailer = mailer_with(&transport, false);

    let result = mailer.send_fixed_notification("bad");
    assert_eq!(result.outcome, DispatchOutcome::ConfigurationError);
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn test_notification_uses_bare_address() {
    let transport = MockTransport::replying(200, "{}");
    let mailer = mailer_with(&transport, true);

    let result = mailer.send_fixed_notification("Pari <pari@example.com>");
    assert!(result.is_success());
    assert_eq!(transport.last_sent().unwrap().to, vec!["pari@example.com"]);
}

#[test]
fn test_notification_templated_with_owner_details() {
    let transport = MockTransport::replying(200, "{}");
    let settings = MailerSettings {
        owner: OwnerProfile {
            name: "Test Owner".to_string(),
            resume_url: Some("https://example.com/resume.pdf".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/test-owner".to_string()),
            github_url: None,
            portfolio_url: None,
        },
        ..MailerSettings::default()
    };
    let mailer = ContactMailer::new(
        Arc::new(transport.clone()),
        ApiKey::new("re_key"),
        settings,
    );

    mailer.send_fixed_notification("user@example.com");

    let sent = transport.last_sent().unwrap();
    assert_eq!(sent.subject, "Thanks for connecting with Test Owner");
    let text = sent.text.unwrap();
    assert!(text.contains("Resume: https://example.com/resume.pdf"));
    assert!(text.contains("LinkedIn: https://www.linkedin.com/in/test-owner"));
    assert!(!text.contains("GitHub"));
    assert!(sent.html.contains("Test Owner"));
}

#[test]
fn test_notification_transport_failures_are_contained() {
    for answer in [
        MockAnswer::ConnectionFailed,
        MockAnswer::Timeout,
        MockAnswer::Status(429, "rate limited".to_string()),
    ] {
        let transport = MockTransport::new(answer);
        let mailer = mailer_with(&transport, true);

        let result = mailer.send_fixed_notification("user@example.com");
        assert_eq!(result.outcome, DispatchOutcome::TransportError);
        assert_eq!(transport.call_count(), 1);
    }
}
