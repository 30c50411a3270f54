//! HMAC request signing.
//!
//! The signed message is six newline-separated fields:
//! ```text
//! METHOD
//! /resource?query
//! dragonchain id
//! timestamp
//! content type (may be empty)
//! base64(sha256(body))
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

use crate::auth::credentials::{Credentials, SigningAlgorithm};
use crate::error::RequestError;

/// Render a timestamp the way the API expects it: UTC, microseconds, trailing `Z`.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Signs requests on behalf of one set of credentials.
pub struct Signer<'a> {
    credentials: &'a Credentials,
}

impl<'a> Signer<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Base64 encoded SHA-256 digest of the body. An absent body hashes as empty.
    pub fn content_digest(body: &[u8]) -> String {
        STANDARD.encode(Sha256::digest(body))
    }

    /// Build the canonical message covered by the signature.
    pub fn message(
        &self,
        method: &str,
        resource: &str,
        timestamp: &str,
        content_type: &str,
        body: &[u8],
    ) -> String {
        [
            method.to_uppercase().as_str(),
            resource,
            self.credentials.dragonchain_id.as_str(),
            timestamp,
            content_type,
            Self::content_digest(body).as_str(),
        ]
        .join("\n")
    }

    /// Compute the raw HMAC signature bytes.
    pub fn sign(
        &self,
        method: &str,
        resource: &str,
        timestamp: &str,
        content_type: &str,
        body: &[u8],
    ) -> Result<Vec<u8>, RequestError> {
        let message = self.message(method, resource, timestamp, content_type, body);
        let key = self.credentials.auth_key.as_bytes();
        match self.credentials.algorithm {
            SigningAlgorithm::Sha256 => keyed_mac::<Hmac<Sha256>>(key, message.as_bytes()),
            SigningAlgorithm::Sha512 => keyed_mac::<Hmac<Sha512>>(key, message.as_bytes()),
        }
    }

    /// Value for the `Authorization` header.
    pub fn authorization(
        &self,
        method: &str,
        resource: &str,
        timestamp: &str,
        content_type: &str,
        body: &[u8],
    ) -> Result<String, RequestError> {
        let signature = self.sign(method, resource, timestamp, content_type, body)?;
        Ok(format!(
            "DC1-HMAC-{} {}:{}",
            self.credentials.algorithm.as_str(),
            self.credentials.auth_key_id,
            STANDARD.encode(signature)
        ))
    }
}

fn keyed_mac<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Result<Vec<u8>, RequestError> {
    let mut mac =
        <M as KeyInit>::new_from_slice(key).map_err(|e| RequestError::Signing(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn creds() -> Credentials {
        Credentials::new("chain-id", "secret-key", "KEYID")
    }

    #[test]
    fn test_timestamp_format() {
        let now = Utc.with_ymd_and_hms(2019, 3, 4, 5, 6, 7).unwrap()
            + chrono::Duration::microseconds(42);
        assert_eq!(timestamp(now), "2019-03-04T05:06:07.000042Z");
    }

    #[test]
    fn test_message_layout() {
        let creds = creds();
        let signer = Signer::new(&creds);
        let msg = signer.message("get", "/transaction/abc", "ts", "", b"");
        let lines: Vec<&str> = msg.split('\n').collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "GET");
        assert_eq!(lines[1], "/transaction/abc");
        assert_eq!(lines[2], "chain-id");
        assert_eq!(lines[3], "ts");
        assert_eq!(lines[4], "");
        // sha256("") in base64
        assert_eq!(lines[5], "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=");
    }

    #[test]
    fn test_signature_is_deterministic() {
        let creds = creds();
        let signer = Signer::new(&creds);
        let a = signer.sign("POST", "/transaction", "ts", "application/json", b"{}").unwrap();
        let b = signer.sign("POST", "/transaction", "ts", "application/json", b"{}").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_signature_changes_with_any_input() {
        let creds = creds();
        let signer = Signer::new(&creds);
        let sign = |method, resource, ts, content_type, body: &[u8]| {
            signer.sign(method, resource, ts, content_type, body).unwrap()
        };
        let base = sign("POST", "/transaction", "ts", "application/json", b"{}");

        assert_ne!(base, sign("PUT", "/transaction", "ts", "application/json", b"{}"));
        assert_ne!(base, sign("POST", "/contract", "ts", "application/json", b"{}"));
        assert_ne!(base, sign("POST", "/transaction", "ts2", "application/json", b"{}"));
        assert_ne!(base, sign("POST", "/transaction", "ts", "", b"{}"));
        assert_ne!(base, sign("POST", "/transaction", "ts", "application/json", b"[]"));

        for other in [
            Credentials::new("other-chain", "secret-key", "KEYID"),
            Credentials::new("chain-id", "other-key", "KEYID"),
        ] {
            let sig = Signer::new(&other)
                .sign("POST", "/transaction", "ts", "application/json", b"{}")
                .unwrap();
            assert_ne!(base, sig);
        }
    }

    #[test]
    fn test_method_case_does_not_matter() {
        let creds = creds();
        let signer = Signer::new(&creds);
        assert_eq!(
            signer.sign("get", "/contract", "ts", "", b"").unwrap(),
            signer.sign("GET", "/contract", "ts", "", b"").unwrap()
        );
    }

    #[test]
    fn test_known_hmac_vector() {
        // RFC 4231 test case 2.
        let out = keyed_mac::<Hmac<Sha256>>(b"Jefe", b"what do ya want for nothing?").unwrap();
        let hex: String = out.iter().map(|b| format!("{:02x}", b)).collect();
        assert_eq!(
            hex,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_authorization_header_format() {
        let creds = creds();
        let signer = Signer::new(&creds);
        let header = signer.authorization("GET", "/contract", "ts", "", b"").unwrap();
        let expected_sig = STANDARD.encode(signer.sign("GET", "/contract", "ts", "", b"").unwrap());
        assert_eq!(header, format!("DC1-HMAC-SHA256 KEYID:{}", expected_sig));

        let creds = creds.with_algorithm(SigningAlgorithm::Sha512);
        let header = Signer::new(&creds).authorization("GET", "/contract", "ts", "", b"").unwrap();
        assert!(header.starts_with("DC1-HMAC-SHA512 KEYID:"));
    }

    #[test]
    fn test_empty_key_still_signs() {
        let creds = Credentials::new("chain-id", "", "KEYID");
        let header = Signer::new(&creds).authorization("GET", "/contract", "ts", "", b"");
        assert!(header.unwrap().starts_with("DC1-HMAC-SHA256 KEYID:"));
    }
}
