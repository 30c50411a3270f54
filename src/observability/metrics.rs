//! Client-side request metrics.
//!
//! # Metrics
//! - `dragonchain_requests_total` (counter): requests by method, outcome
//! - `dragonchain_request_duration_seconds` (histogram): round trip latency by method
//!
//! Only the `metrics` facade is used; installing an exporter is left to the
//! application embedding the client.

use std::time::Duration;

/// How a single request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    ApiError,
    RequestError,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::ApiError => "api_error",
            Outcome::RequestError => "request_error",
        }
    }
}

/// Record one completed round trip.
pub fn record_request(method: &str, outcome: Outcome, elapsed: Duration) {
    metrics::counter!(
        "dragonchain_requests_total",
        "method" => method.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    metrics::histogram!(
        "dragonchain_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(elapsed.as_secs_f64());
}
