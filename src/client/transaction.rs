//! Transaction operations.

use super::{item_path, to_body, Client};
use crate::error::{Error, Result};
use crate::query::{resource_with_params, QueryOptions};
use crate::types::transaction::{BulkTransactions, CreatedTransaction, QueryResults};
use crate::types::{
    normalize_version, Transaction, TransactionDefinition, DEFAULT_TRANSACTION_VERSION,
};

impl Client {
    /// Fetch a single transaction by ID.
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction> {
        self.get(&item_path("transaction", id)?).await
    }

    /// Create a transaction and return its ID.
    ///
    /// A non-positive or empty version is sent as `"1"`; a version that is
    /// not an integer fails locally without contacting the server.
    pub async fn create_transaction(&self, def: &TransactionDefinition) -> Result<String> {
        let def = normalized(def)?;
        let body = to_body(&def)?;
        let created: CreatedTransaction = self.post("/transaction", body).await?;
        tracing::debug!(txn_id = %created.transaction_id, "Transaction created");
        Ok(created.transaction_id)
    }

    /// Create several transactions in one request.
    ///
    /// Not atomic: the call succeeds if the server accepted at least one
    /// transaction, and fails with an API error if it accepted none.
    /// Compare the number of returned IDs with `defs.len()` to detect
    /// partial failure.
    pub async fn bulk_create_transactions(
        &self,
        defs: &[TransactionDefinition],
    ) -> Result<Vec<String>> {
        let defs = defs
            .iter()
            .map(normalized)
            .collect::<Result<Vec<_>>>()?;
        let body = to_body(&BulkTransactions { payload: &defs })?;
        let envelope = self
            .transport
            .post("/transaction_bulk", body)
            .await?;
        let status = envelope.status;
        let created: Option<Vec<CreatedTransaction>> = envelope.into_response()?;
        let ids: Vec<String> = created
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.transaction_id)
            .collect();
        if ids.is_empty() && !defs.is_empty() {
            return Err(Error::Api { status });
        }
        if ids.len() < defs.len() {
            tracing::warn!(
                requested = defs.len(),
                created = ids.len(),
                "Bulk transaction create partially succeeded"
            );
        }
        Ok(ids)
    }

    /// Search transactions. A null or missing result list is returned as empty.
    pub async fn query_transactions(&self, options: &QueryOptions) -> Result<Vec<Transaction>> {
        let resource = resource_with_params("/transaction", options);
        let results: Option<QueryResults<Transaction>> = self.get(&resource).await?;
        Ok(results.and_then(|r| r.results).unwrap_or_default())
    }
}

fn normalized(def: &TransactionDefinition) -> Result<TransactionDefinition> {
    let mut def = def.clone();
    def.version = normalize_version(&def.version, DEFAULT_TRANSACTION_VERSION)?;
    Ok(def)
}
