//! Data models for submissions, outbound emails and dispatch results.

pub mod dispatch;
pub mod message;
pub mod submission;

pub use dispatch::{DispatchOutcome, EmailDispatchResult, ProviderReply, ProviderResponse};
pub use message::OutboundEmail;
pub use submission::ContactSubmission;
