//! Application service layer.
//!
//! Services sit between the MCP handlers and the blocking mail workflow.

mod mail_service;

pub use mail_service::{MailService, MailServiceImpl};
