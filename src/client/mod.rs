//! Resource clients.
//!
//! # Data Flow
//! ```text
//! caller
//!     → transaction.rs / contract.rs (validate, serialize, pick verb and path)
//!     → Transport (sign, send, decode envelope)
//!     → Envelope::into_response (ok flag → typed result or API error)
//! ```
//!
//! Every operation performs exactly one request and never retries.

mod contract;
mod transaction;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::{Error, RequestError, Result};
use crate::transport::{HttpSend, ReqwestSender, Transport};

/// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Client for a single Dragonchain.
///
/// Holds no mutable state, so it can be shared across tasks behind an `Arc`.
#[derive(Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Client against the default endpoint using a default reqwest sender.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_sender(credentials, ReqwestSender::default())
    }

    /// Client using a caller supplied sender.
    pub fn with_sender(credentials: Credentials, sender: impl HttpSend + 'static) -> Self {
        Self {
            transport: Transport::new("", credentials, sender),
        }
    }

    /// Override the endpoint. An empty string restores the default.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.transport.set_endpoint(endpoint.into());
        self
    }

    /// Build a client from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let sender = ReqwestSender::with_options(
            config.verify_tls,
            config.timeout_secs.map(Duration::from_secs),
        )
        .map_err(|e| Error::Request(RequestError::Client(e)))?;
        Ok(Self {
            transport: Transport::new(config.endpoint.clone(), config.credentials.clone(), sender),
        })
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    pub fn credentials(&self) -> &Credentials {
        self.transport.credentials()
    }

    async fn get<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        self.transport.get(resource).await?.into_response()
    }

    async fn post<T: DeserializeOwned>(&self, resource: &str, body: Vec<u8>) -> Result<T> {
        self.transport.post(resource, body).await?.into_response()
    }

    async fn put<T: DeserializeOwned>(&self, resource: &str, body: Vec<u8>) -> Result<T> {
        self.transport.put(resource, body).await?.into_response()
    }

    async fn delete<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        self.transport.delete(resource).await?.into_response()
    }
}

/// Path for a single item, with `id` percent-encoded as one segment.
fn item_path(collection: &str, id: &str) -> Result<String> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(Error::Request(RequestError::InvalidId(id.to_string())));
    }
    Ok(format!("/{}/{}", collection, utf8_percent_encode(id, PATH_SEGMENT)))
}

fn to_body<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| Error::Request(RequestError::Encode(e)))
}
