//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (DRAGONCHAIN_ID, AUTH_KEY, AUTH_KEY_ID, DRAGONCHAIN_ENDPOINT)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → Client::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so credentials can come from the environment alone
//! - Validation reports every problem at once

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::ClientConfig;
pub use validation::{validate_config, ValidationError};
