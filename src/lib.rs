//! Client library for the Dragonchain HTTP API.
//!
//! Every request is signed with the account's HMAC credentials and every
//! response arrives wrapped in a `{ ok, status, response }` envelope, which
//! the resource clients unwrap into typed results.
//!
//! ```rust,no_run
//! use dragonchain_client::{Client, Credentials, QueryOptions, TransactionDefinition};
//!
//! # async fn run() -> Result<(), dragonchain_client::Error> {
//! let client = Client::new(Credentials::new("chain-id", "auth-key", "AUTHKEYID"));
//!
//! let id = client
//!     .create_transaction(&TransactionDefinition::new("banana", "hello"))
//!     .await?;
//! let txn = client.get_transaction(&id).await?;
//!
//! let recent = client
//!     .query_transactions(&QueryOptions::new("txn_type:banana").limit(5))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod query;
pub mod transport;
pub mod types;

pub use auth::{Credentials, SigningAlgorithm};
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, RequestError, Result};
pub use query::QueryOptions;
pub use transport::{HttpSend, ReqwestSender};
pub use types::{
    Contract, ContractDefinition, ContractUpdate, ExecutionOrder, Transaction,
    TransactionDefinition,
};
