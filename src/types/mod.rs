//! Request and response payloads.
//!
//! Server-side records (`Transaction`, `Contract`) are only ever
//! deserialized; definitions (`TransactionDefinition`, `ContractDefinition`,
//! `ContractUpdate`) are only ever serialized.

pub mod contract;
pub mod transaction;

pub use contract::{
    Contract, ContractDefinition, ContractState, ContractStatus, ContractUpdate, DesiredState,
    ExecutionOrder, DEFAULT_CONTRACT_VERSION,
};
pub use transaction::{
    Transaction, TransactionDefinition, TransactionHeader, TransactionProof,
    DEFAULT_TRANSACTION_VERSION,
};

use crate::error::RequestError;

/// Normalize a definition version.
///
/// Empty or non-positive versions become `default`; anything that is not an
/// integer is rejected before a request is built.
pub(crate) fn normalize_version(version: &str, default: &str) -> Result<String, RequestError> {
    let trimmed = version.trim();
    if trimmed.is_empty() {
        return Ok(default.to_string());
    }
    let parsed: i64 = trimmed
        .parse()
        .map_err(|source| RequestError::InvalidVersion {
            version: version.to_string(),
            source,
        })?;
    if parsed <= 0 {
        Ok(default.to_string())
    } else {
        Ok(parsed.to_string())
    }
}
