//! Smart contract records and definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version sent when a definition carries none (or a non-positive one).
pub const DEFAULT_CONTRACT_VERSION: &str = "3";

/// How multiple pending invocations of a contract are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionOrder {
    /// One invocation at a time, in order.
    #[default]
    Serial,
    /// Invocations may run concurrently.
    Parallel,
}

/// Lifecycle state reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractState {
    Pending,
    Active,
    Inactive,
    Updating,
    Deleting,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

/// State a caller may ask for when updating a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DesiredState {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractStatus {
    pub state: ContractState,
    pub msg: String,
    pub timestamp: String,
}

/// A smart contract as stored by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Contract {
    pub id: String,

    /// Contract name; transactions of this type invoke the contract.
    #[serde(rename = "txn_type", alias = "name")]
    pub name: String,

    pub status: ContractStatus,

    pub env: BTreeMap<String, String>,

    pub runtime: String,

    /// Location of the contract code (image reference).
    pub image: String,

    pub image_digest: String,

    pub cmd: String,

    pub args: Vec<String>,

    pub execution_order: ExecutionOrder,

    /// Secret names only; values are never returned.
    pub existing_secrets: Vec<String>,

    pub cron: Option<String>,

    pub seconds: Option<u32>,
}

/// Input for creating a smart contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContractDefinition {
    #[serde(default)]
    pub version: String,

    /// Contract name.
    pub txn_type: String,

    #[serde(default)]
    pub execution_order: ExecutionOrder,

    /// Docker image to run.
    pub image: String,

    pub cmd: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub secrets: BTreeMap<String, String>,

    /// Invoke every N seconds. Mutually exclusive with `cron`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,

    /// Invoke on a cron schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,

    /// Registry credentials for private images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
}

impl ContractDefinition {
    pub fn new(txn_type: impl Into<String>, image: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            version: DEFAULT_CONTRACT_VERSION.to_string(),
            txn_type: txn_type.into(),
            image: image.into(),
            cmd: cmd.into(),
            ..Default::default()
        }
    }

    pub fn execution_order(mut self, order: ExecutionOrder) -> Self {
        self.execution_order = order;
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn secret(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(key.into(), value.into());
        self
    }

    pub fn every_seconds(mut self, seconds: u32) -> Self {
        self.seconds = Some(seconds);
        self
    }

    pub fn cron(mut self, schedule: impl Into<String>) -> Self {
        self.cron = Some(schedule.into());
        self
    }
}

/// Partial update for an existing contract. Unset fields are left
/// untouched by the service and are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_order: Option<ExecutionOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_state: Option<DesiredState>,
}
