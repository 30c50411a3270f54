//! Configuration validation.
//!
//! Serde handles syntax; this checks that the values can actually be used
//! to sign and send requests.

use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Check a configuration, returning every error found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let required = [
        ("credentials.dragonchain_id", &config.credentials.dragonchain_id),
        ("credentials.auth_key", &config.credentials.auth_key),
        ("credentials.auth_key_id", &config.credentials.auth_key_id),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(ValidationError {
                field,
                message: "must not be empty".to_string(),
            });
        }
    }

    if !config.endpoint.is_empty() {
        match Url::parse(&config.endpoint) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ValidationError {
                field: "endpoint",
                message: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ValidationError {
                field: "endpoint",
                message: format!("invalid URL '{}': {}", config.endpoint, e),
            }),
        }
    }

    if config.timeout_secs == Some(0) {
        errors.push(ValidationError {
            field: "timeout_secs",
            message: "must be greater than 0".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
