//! Structured logging setup for binaries.
//!
//! The library itself only emits `tracing` events; a subscriber is installed
//! by whichever binary embeds it.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a `fmt` subscriber. `RUST_LOG` wins over `default_level`.
///
/// Returns false if a global subscriber was already set.
pub fn init_logging(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("dragonchain_client={0},dragonchain_cli={0}", default_level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
