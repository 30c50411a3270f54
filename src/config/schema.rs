//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::auth::Credentials;
use crate::transport::DEFAULT_ENDPOINT;

/// Root configuration for a [`Client`](crate::Client).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://api.dragonchain.com").
    pub endpoint: String,

    /// Verify the server certificate.
    pub verify_tls: bool,

    /// Per-request timeout applied by the HTTP sender. None waits forever.
    pub timeout_secs: Option<u64>,

    /// Account credentials.
    pub credentials: Credentials,

    /// Log level for binaries (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            verify_tls: true,
            timeout_secs: None,
            credentials: Credentials::default(),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SigningAlgorithm;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.verify_tls);
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_full_config() {
        let config: ClientConfig = toml::from_str(
            r#"
            endpoint = "https://chain.example.com"
            verify_tls = false
            timeout_secs = 30

            [credentials]
            dragonchain_id = "chain"
            auth_key = "secret"
            auth_key_id = "KEY"
            algorithm = "SHA512"
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "https://chain.example.com");
        assert!(!config.verify_tls);
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.credentials.auth_key_id, "KEY");
        assert_eq!(config.credentials.algorithm, SigningAlgorithm::Sha512);
    }
}
