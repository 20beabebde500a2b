//! Email body templates.
//!
//! User-supplied values are always HTML-escaped before they are embedded.

use crate::config::OwnerProfile;
use crate::models::ContactSubmission;

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape, then turn line breaks into `<br/>`.
fn escape_multiline(s: &str) -> String {
    escape_html(s).replace("\r\n", "\n").replace('\n', "<br/>")
}

/// HTML body for a contact-form submission delivered to the owner.
pub fn contact_html(submission: &ContactSubmission) -> String {
    let mut html = String::from("<h2>Contact form submission</h2>");
    html.push_str(&format!(
        "<p><strong>Name:</strong> {}</p>",
        escape_html(&submission.name)
    ));
    html.push_str(&format!(
        "<p><strong>Email:</strong> {}</p>",
        escape_html(submission.sender_email.trim())
    ));
    if let Some(phone) = submission.phone() {
        html.push_str(&format!(
            "<p><strong>Phone:</strong> {}</p>",
            escape_html(phone)
        ));
    }
    html.push_str("<hr/>");
    html.push_str("<div><p><strong>Message:</strong></p>");
    html.push_str(&format!("<div>{}</div>", escape_multiline(&submission.body)));
    html.push_str("</div>");
    html
}

/// Links that are configured, with their labels.
fn profile_links(owner: &OwnerProfile) -> Vec<(&'static str, &str)> {
    [
        ("Resume", owner.resume_url.as_deref()),
        ("LinkedIn", owner.linkedin_url.as_deref()),
        ("GitHub", owner.github_url.as_deref()),
        ("Portfolio", owner.portfolio_url.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|u| (label, u)))
    .collect()
}

/// Subject of the fixed notification email.
pub fn notification_subject(owner: &OwnerProfile) -> String {
    format!("Thanks for connecting with {}", owner.name)
}

/// Plain-text body of the fixed notification email.
pub fn notification_text(owner: &OwnerProfile) -> String {
    let mut text = format!(
        "Hi,\n\nThanks for getting in touch with {}. I'll get back to you soon.\n",
        owner.name
    );

    let links = profile_links(owner);
    if !links.is_empty() {
        text.push_str("\nIn the meantime, here is where you can find more about me:\n");
        for (label, url) in links {
            text.push_str(&format!("- {}: {}\n", label, url));
        }
    }

    text.push_str(&format!("\nBest regards,\n{}\n", owner.name));
    text
}

/// HTML body of the fixed notification email.
pub fn notification_html(owner: &OwnerProfile) -> String {
    let name = escape_html(&owner.name);
    let mut html = format!(
        "<p>Hi,</p><p>Thanks for getting in touch with {}. I'll get back to you soon.</p>",
        name
    );

    let links = profile_links(owner);
    if !links.is_empty() {
        html.push_str("<p>In the meantime, here is where you can find more about me:</p><ul>");
        for (label, url) in links {
            let url = escape_html(url);
            html.push_str(&format!(
                "<li><strong>{}:</strong> <a href=\"{}\">{}</a></li>",
                label, url, url
            ));
        }
        html.push_str("</ul>");
    }

    html.push_str(&format!("<p>Best regards,<br/>{}</p>", name));
    html
}
