//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the email address and the
//! provider credential, plus the validation errors they produce.

pub mod credential;
pub mod email;
pub mod errors;

pub use credential::ApiKey;
pub use email::{is_valid_email, EmailAddress};
pub use errors::ValidationError;
