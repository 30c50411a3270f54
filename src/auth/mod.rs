//! Request authentication.
//!
//! # Data Flow
//! ```text
//! Credentials (chain id, auth key id, secret auth key)
//!     → signer.rs (canonical message, HMAC signature)
//!     → Authorization header on every outgoing request
//! ```
//!
//! # Security Constraints
//! - The secret auth key is never logged or printed by `Debug`
//! - The signature covers method, resource, chain id, timestamp,
//!   content type and a digest of the body

pub mod credentials;
pub mod signer;

pub use credentials::{Credentials, SigningAlgorithm};
pub use signer::{timestamp, Signer};
