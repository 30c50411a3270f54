//! Account credentials used to sign requests.

use serde::{Deserialize, Serialize};

/// Hash function used for the HMAC signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SigningAlgorithm {
    #[default]
    #[serde(rename = "SHA256", alias = "sha256")]
    Sha256,
    #[serde(rename = "SHA512", alias = "sha512")]
    Sha512,
}

impl SigningAlgorithm {
    /// Name used in the `DC1-HMAC-<name>` authorization scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningAlgorithm::Sha256 => "SHA256",
            SigningAlgorithm::Sha512 => "SHA512",
        }
    }
}

/// Credentials for a single Dragonchain.
///
/// Immutable once handed to a [`Client`](crate::Client).
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Credentials {
    /// ID of the chain the requests are addressed to.
    pub dragonchain_id: String,

    /// Secret HMAC key.
    pub auth_key: String,

    /// Public identifier of the key, sent in the authorization header.
    pub auth_key_id: String,

    /// HMAC hash function.
    pub algorithm: SigningAlgorithm,
}

impl Credentials {
    pub fn new(
        dragonchain_id: impl Into<String>,
        auth_key: impl Into<String>,
        auth_key_id: impl Into<String>,
    ) -> Self {
        Self {
            dragonchain_id: dragonchain_id.into(),
            auth_key: auth_key.into(),
            auth_key_id: auth_key_id.into(),
            algorithm: SigningAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: SigningAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("dragonchain_id", &self.dragonchain_id)
            .field("auth_key", &"<redacted>")
            .field("auth_key_id", &self.auth_key_id)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
