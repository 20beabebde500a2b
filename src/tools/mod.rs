//! MCP tool parameter and reply types.
//!
//! - **email**: contact-form and notification tools

pub mod email;

pub use email::{SendContactEmailParams, SendNotificationParams, ToolReply, ToolStatus};
