//! Configuration management for the Contact Mail MCP Server.
//!
//! Configuration is resolved once at process start from environment variables
//! (and a `.env` file when present). A missing provider key is not an error here:
//! it surfaces later as a configuration outcome on every dispatch attempt.

use crate::domain::{is_valid_email, ApiKey};
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Resend endpoint for sending a single email.
pub const DEFAULT_API_URL: &str = "https://api.resend.com/emails";

/// Default sender shown on every outgoing email.
pub const DEFAULT_FROM: &str = "Website Contact Form <onboarding@resend.dev>";

/// Default destination for contact-form submissions.
pub const DEFAULT_DESTINATION: &str = "vadegharudayraj@gmail.com";

/// Environment variable holding the provider key.
pub const API_KEY_ENV: &str = "RESEND_API_KEY";

/// Static contact details of the person the agents speak for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerProfile {
    /// Name used in greetings and signatures
    pub name: String,

    /// Link to a hosted resume
    pub resume_url: Option<String>,

    /// LinkedIn profile link
    pub linkedin_url: Option<String>,

    /// GitHub profile link
    pub github_url: Option<String>,

    /// Personal site / portfolio link
    pub portfolio_url: Option<String>,
}

impl Default for OwnerProfile {
    fn default() -> Self {
        OwnerProfile {
            name: "Uday Raj".to_string(),
            resume_url: None,
            linkedin_url: None,
            github_url: None,
            portfolio_url: None,
        }
    }
}

/// Configuration for the Contact Mail MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Email provider endpoint
    pub api_url: String,

    /// Provider key; `None` when unset or blank
    pub api_key: Option<ApiKey>,

    /// HTTP request timeout in seconds (default: 15)
    pub request_timeout: u64,

    /// Sender for all outgoing mail
    pub from_address: String,

    /// Where contact-form submissions are delivered
    pub destination_email: String,

    /// Owner details used by the notification template
    pub owner: OwnerProfile,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RESEND_API_KEY`: provider key (dispatches fail with a configuration outcome without it)
    /// - `RESEND_API_URL`: provider endpoint (default: Resend's `/emails`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 15)
    /// - `CONTACT_FROM`: sender address (default: `Website Contact Form <onboarding@resend.dev>`)
    /// - `CONTACT_DESTINATION_EMAIL`: destination for contact submissions
    /// - `OWNER_NAME`, `OWNER_RESUME_URL`, `OWNER_LINKEDIN_URL`, `OWNER_GITHUB_URL`,
    ///   `OWNER_PORTFOLIO_URL`: notification template details
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy doesn't print to stdout, which MCP owns
        let _ = dotenvy::dotenv();

        let api_key = env::var(API_KEY_ENV).ok().and_then(|key| ApiKey::new(key));

        let api_url = env::var("RESEND_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 15)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let from_address = env::var("CONTACT_FROM").unwrap_or_else(|_| DEFAULT_FROM.to_string());
        if !is_valid_email(&from_address) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_FROM".to_string(),
                reason: format!("Not an email address: {}", from_address),
            });
        }

        let destination_email = env::var("CONTACT_DESTINATION_EMAIL")
            .unwrap_or_else(|_| DEFAULT_DESTINATION.to_string());
        if !is_valid_email(&destination_email) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_DESTINATION_EMAIL".to_string(),
                reason: format!("Not an email address: {}", destination_email),
            });
        }

        let owner = OwnerProfile {
            name: Self::optional_env("OWNER_NAME").unwrap_or_else(|| OwnerProfile::default().name),
            resume_url: Self::optional_env("OWNER_RESUME_URL"),
            linkedin_url: Self::optional_env("OWNER_LINKEDIN_URL"),
            github_url: Self::optional_env("OWNER_GITHUB_URL"),
            portfolio_url: Self::optional_env("OWNER_PORTFOLIO_URL"),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_url,
            api_key,
            request_timeout,
            from_address,
            destination_email,
            owner,
            log_level,
        })
    }

    /// Read a variable, treating blank values as unset.
    fn optional_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            request_timeout: 15,
            from_address: DEFAULT_FROM.to_string(),
            destination_email: DEFAULT_DESTINATION.to_string(),
            owner: OwnerProfile::default(),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const ALL_VARS: &[&str] = &[
        "RESEND_API_KEY",
        "RESEND_API_URL",
        "REQUEST_TIMEOUT",
        "CONTACT_FROM",
        "CONTACT_DESTINATION_EMAIL",
        "OWNER_NAME",
        "OWNER_RESUME_URL",
        "OWNER_LINKEDIN_URL",
        "OWNER_GITHUB_URL",
        "OWNER_PORTFOLIO_URL",
        "LOG_LEVEL",
    ];

    // Sets vars for one test and clears every config var on drop
    struct EnvGuard;

    impl EnvGuard {
        fn new() -> Self {
            for var in ALL_VARS {
                env::remove_var(var);
            }
            EnvGuard
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in ALL_VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.request_timeout, 15);
        assert_eq!(config.destination_email, DEFAULT_DESTINATION);
        assert_eq!(config.owner.name, "Uday Raj");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("RESEND_API_KEY", "re_test_123");
        guard.set("REQUEST_TIMEOUT", "30");
        guard.set("CONTACT_DESTINATION_EMAIL", "owner@example.com");
        guard.set("OWNER_NAME", "Test Owner");
        guard.set("OWNER_GITHUB_URL", "https://github.com/test-owner");
        guard.set("OWNER_LINKEDIN_URL", "  ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key.as_ref().map(|k| k.expose()), Some("re_test_123"));
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.destination_email, "owner@example.com");
        assert_eq!(config.owner.name, "Test Owner");
        assert_eq!(
            config.owner.github_url.as_deref(),
            Some("https://github.com/test-owner")
        );
        assert_eq!(config.owner.linkedin_url, None);
    }

    #[test]
    #[serial]
    fn test_config_missing_key_is_not_fatal() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.from_address, DEFAULT_FROM);
    }

    #[test]
    #[serial]
    fn test_config_blank_key_is_absent() {
        let mut guard = EnvGuard::new();
        guard.set("RESEND_API_KEY", "   ");

        let config = Config::from_env().unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_config_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("RESEND_API_URL", "not-a-url");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "RESEND_API_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_timeout() {
        let mut guard = EnvGuard::new();
        guard.set("REQUEST_TIMEOUT", "soon");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "REQUEST_TIMEOUT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }

        guard.set("REQUEST_TIMEOUT", "0");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_invalid_destination() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_DESTINATION_EMAIL", "owner-at-example");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_DESTINATION_EMAIL")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_MAIL_U64", "42");

        assert_eq!(Config::parse_env_u64("TEST_MAIL_U64", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u64("NONEXISTENT_MAIL_VAR", 10).unwrap(), 10);

        env::remove_var("TEST_MAIL_U64");
    }
}
