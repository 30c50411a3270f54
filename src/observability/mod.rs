//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! transport (one event pair per request)
//!     → logging.rs (tracing subscriber, installed by binaries)
//!     → metrics.rs (counters and histograms via the metrics facade)
//! ```
//!
//! # Design Decisions
//! - The secret auth key and signatures are never logged
//! - Request bodies are not logged; only method, resource and status

pub mod logging;
pub mod metrics;
