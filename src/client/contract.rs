//! Smart contract operations.

use serde_json::Value;

use super::{item_path, to_body, Client};
use crate::error::Result;
use crate::query::{resource_with_params, QueryOptions};
use crate::types::transaction::QueryResults;
use crate::types::{
    normalize_version, Contract, ContractDefinition, ContractUpdate, DEFAULT_CONTRACT_VERSION,
};

impl Client {
    /// Fetch a single contract by ID.
    pub async fn get_contract(&self, id: &str) -> Result<Contract> {
        self.get(&item_path("contract", id)?).await
    }

    /// Deploy a new contract.
    ///
    /// A non-positive or empty version is sent as `"3"`; a version that is
    /// not an integer fails locally without contacting the server.
    pub async fn create_contract(&self, def: &ContractDefinition) -> Result<Contract> {
        let mut def = def.clone();
        def.version = normalize_version(&def.version, DEFAULT_CONTRACT_VERSION)?;
        let body = to_body(&def)?;
        let contract: Contract = self.post("/contract", body).await?;
        tracing::debug!(contract_id = %contract.id, name = %contract.name, "Contract created");
        Ok(contract)
    }

    /// Search contracts. A null or missing result list is returned as empty.
    pub async fn query_contracts(&self, options: &QueryOptions) -> Result<Vec<Contract>> {
        let resource = resource_with_params("/contract", options);
        let results: Option<QueryResults<Contract>> = self.get(&resource).await?;
        Ok(results.and_then(|r| r.results).unwrap_or_default())
    }

    /// Apply a partial update. Fields left as `None` are not sent.
    pub async fn update_contract(&self, id: &str, update: &ContractUpdate) -> Result<Contract> {
        let mut update = update.clone();
        if let Some(version) = update.version.as_deref() {
            update.version = Some(normalize_version(version, DEFAULT_CONTRACT_VERSION)?);
        }
        let body = to_body(&update)?;
        self.put(&item_path("contract", id)?, body).await
    }

    /// Remove a contract.
    pub async fn delete_contract(&self, id: &str) -> Result<()> {
        let _: Value = self.delete(&item_path("contract", id)?).await?;
        tracing::debug!(contract_id = %id, "Contract deleted");
        Ok(())
    }
}
