//! Pluggable HTTP sender.
//!
//! [`Transport`](super::Transport) builds and signs requests but never talks
//! to the network itself; it hands each request to an [`HttpSend`]. Tests
//! substitute their own implementation.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::BoxError;

/// Sends a fully built request and returns the raw response.
#[async_trait]
pub trait HttpSend: Send + Sync {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError>;
}

/// [`HttpSend`] backed by a `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestSender {
    client: reqwest::Client,
}

impl ReqwestSender {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a sender with TLS verification and timeout settings.
    ///
    /// Timeouts belong to the sender; the transport never imposes one.
    pub fn with_options(verify_tls: bool, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().danger_accept_invalid_certs(!verify_tls);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpSend for ReqwestSender {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError> {
        Ok(self.client.execute(request).await?)
    }
}
