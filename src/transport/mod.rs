//! HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! resource client (method, resource path, JSON body)
//!     → Transport (URL, timestamp, signature headers)
//!     → sender.rs (HttpSend: reqwest or a test double)
//!     → envelope.rs ({ ok, status, response })
//!     → resource client decides success or API error
//! ```
//!
//! # Responsibilities
//! - Resolve the endpoint (default `https://api.dragonchain.com`)
//! - Sign every request with the account credentials
//! - Read the whole response body on every path before decoding
//! - Record request metrics and debug events (never the secret key)

pub mod envelope;
pub mod sender;

pub use envelope::Envelope;
pub use sender::{HttpSend, ReqwestSender};

use chrono::Utc;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use std::time::Instant;
use url::{Position, Url};

use crate::auth::{timestamp, Credentials, Signer};
use crate::error::RequestError;
use crate::observability::metrics;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.dragonchain.com";

/// Content type sent (and signed) with every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Signs and sends requests to a single API endpoint.
pub struct Transport {
    endpoint: String,
    credentials: Credentials,
    sender: Box<dyn HttpSend>,
}

impl Transport {
    /// Create a transport. An empty endpoint resolves to [`DEFAULT_ENDPOINT`].
    pub fn new(
        endpoint: impl Into<String>,
        credentials: Credentials,
        sender: impl HttpSend + 'static,
    ) -> Self {
        Self {
            endpoint: resolve_endpoint(endpoint.into()),
            credentials,
            sender: Box::new(sender),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) fn set_endpoint(&mut self, endpoint: String) {
        self.endpoint = resolve_endpoint(endpoint);
    }

    pub async fn get(&self, resource: &str) -> Result<Envelope, RequestError> {
        self.request(Method::GET, resource, None).await
    }

    pub async fn post(&self, resource: &str, body: Vec<u8>) -> Result<Envelope, RequestError> {
        self.request(Method::POST, resource, Some(body)).await
    }

    pub async fn put(&self, resource: &str, body: Vec<u8>) -> Result<Envelope, RequestError> {
        self.request(Method::PUT, resource, Some(body)).await
    }

    pub async fn delete(&self, resource: &str) -> Result<Envelope, RequestError> {
        self.request(Method::DELETE, resource, None).await
    }

    /// Perform one signed round trip and decode the response envelope.
    ///
    /// `resource` is the path (and query string) appended to the endpoint.
    /// The signature covers the path and query as sent, so callers should
    /// pass already percent-encoded segments.
    pub async fn request(
        &self,
        method: Method,
        resource: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Envelope, RequestError> {
        let started = Instant::now();
        let result = self.execute(&method, resource, body).await;
        let outcome = match &result {
            Ok(envelope) if envelope.ok => metrics::Outcome::Ok,
            Ok(_) => metrics::Outcome::ApiError,
            Err(_) => metrics::Outcome::RequestError,
        };
        metrics::record_request(method.as_str(), outcome, started.elapsed());
        result
    }

    async fn execute(
        &self,
        method: &Method,
        resource: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Envelope, RequestError> {
        let url = Url::parse(&format!("{}{}", self.endpoint, resource))?;
        // Sign exactly what goes on the wire, after URL normalization.
        let signed_resource = url[Position::BeforePath..Position::AfterQuery].to_string();
        let content_type = if body.is_some() { JSON_CONTENT_TYPE } else { "" };
        let body = body.unwrap_or_default();

        let timestamp = timestamp(Utc::now());
        let authorization = Signer::new(&self.credentials).authorization(
            method.as_str(),
            &signed_resource,
            &timestamp,
            content_type,
            &body,
        )?;

        let mut request = reqwest::Request::new(method.clone(), url);
        let headers = request.headers_mut();
        headers.insert(
            "dragonchain",
            header_value("dragonchain", &self.credentials.dragonchain_id)?,
        );
        headers.insert("timestamp", header_value("timestamp", &timestamp)?);
        headers.insert(AUTHORIZATION, header_value("Authorization", &authorization)?);
        if !content_type.is_empty() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
            *request.body_mut() = Some(body.into());
        }

        tracing::debug!(method = %method, resource = %signed_resource, "Sending request");

        let response = self.sender.send(request).await.map_err(RequestError::Send)?;
        let status = response.status();
        // Consumes the response so the connection is released on every path.
        let bytes = response.bytes().await.map_err(RequestError::Body)?;

        tracing::debug!(
            method = %method,
            resource = %signed_resource,
            status = status.as_u16(),
            bytes = bytes.len(),
            "Received response"
        );

        match serde_json::from_slice::<Envelope>(&bytes) {
            Ok(envelope) => {
                if !envelope.ok {
                    tracing::warn!(
                        method = %method,
                        resource = %signed_resource,
                        status = envelope.status,
                        "API rejected request"
                    );
                }
                Ok(envelope)
            }
            // A non-2xx answer without an envelope is still an API answer.
            Err(_) if !status.is_success() => {
                tracing::warn!(
                    method = %method,
                    resource = %signed_resource,
                    status = status.as_u16(),
                    "API returned non-success status without envelope"
                );
                Ok(Envelope {
                    ok: false,
                    status: status.as_u16(),
                    response: Value::Null,
                })
            }
            Err(e) => Err(RequestError::Decode(e)),
        }
    }
}

fn resolve_endpoint(endpoint: String) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_ENDPOINT.to_string()
    } else {
        trimmed.to_string()
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, RequestError> {
    HeaderValue::from_str(value).map_err(|source| RequestError::Header { name, source })
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.credentials)
            .finish()
    }
}
