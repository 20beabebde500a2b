//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is invalid.
    InvalidEmail(String),

    /// One or more required text fields are empty.
    MissingFields(Vec<&'static str>),
}

impl ValidationError {
    /// Names of the input fields this error refers to.
    pub fn fields(&self) -> Vec<String> {
        match self {
            Self::InvalidEmail(_) => vec!["email".to_string()],
            Self::MissingFields(fields) => fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "invalid sender email: {}", email),
            Self::MissingFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}
