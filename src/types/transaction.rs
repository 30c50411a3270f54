//! Transaction records and definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version sent when a definition carries none (or a non-positive one).
pub const DEFAULT_TRANSACTION_VERSION: &str = "1";

/// A transaction committed to a Dragonchain.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Transaction {
    pub version: String,

    /// Dragonchain resource name of the record type.
    pub dcrn: String,

    pub header: TransactionHeader,

    /// Payload as submitted; a string or an arbitrary JSON value.
    pub payload: Value,

    pub proof: TransactionProof,
}

/// Metadata for a [`Transaction`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransactionHeader {
    /// Unique transaction ID.
    pub txn_id: String,

    /// Transaction type. For smart contract invocations this is the
    /// contract name.
    pub txn_type: String,

    /// Chain the transaction belongs to.
    pub dc_id: String,

    /// Optional free-form tag, useful when querying.
    pub tag: String,

    /// Epoch timestamp of the commit.
    pub timestamp: String,

    /// Block the transaction was committed to.
    pub block_id: String,

    /// ID of the contract invocation that produced this transaction, if any.
    pub invoker: String,
}

/// Proof material for a [`Transaction`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransactionProof {
    pub full: String,
    pub stripped: String,
}

/// Input for creating a transaction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TransactionDefinition {
    #[serde(default)]
    pub version: String,

    /// Transaction type; the contract name for smart contract invocations.
    pub txn_type: String,

    pub payload: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl TransactionDefinition {
    pub fn new(txn_type: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self {
            version: DEFAULT_TRANSACTION_VERSION.to_string(),
            txn_type: txn_type.into(),
            payload: payload.into(),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// `response` of a create call.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedTransaction {
    pub transaction_id: String,
}

/// Body of a bulk create call.
#[derive(Debug, Serialize)]
pub(crate) struct BulkTransactions<'a> {
    pub payload: &'a [TransactionDefinition],
}

/// `response` of a query call; `results` may be null.
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResults<T> {
    pub results: Option<Vec<T>>,
}
