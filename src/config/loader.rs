//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_DRAGONCHAIN_ID: &str = "DRAGONCHAIN_ID";
pub const ENV_AUTH_KEY: &str = "AUTH_KEY";
pub const ENV_AUTH_KEY_ID: &str = "AUTH_KEY_ID";
pub const ENV_ENDPOINT: &str = "DRAGONCHAIN_ENDPOINT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load a TOML file, apply environment overrides, then validate.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&content, |key| std::env::var(key).ok())?;
    tracing::debug!(path = %path.display(), endpoint = %config.endpoint, "Configuration loaded");
    Ok(config)
}

/// Build a configuration from defaults and environment variables only.
pub fn load_from_env() -> Result<ClientConfig, ConfigError> {
    parse_config("", |key| std::env::var(key).ok())
}

/// Parse, override and validate. `env` looks up a variable by name.
pub fn parse_config<F>(content: &str, env: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config: ClientConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
    apply_env_overrides(&mut config, env);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn apply_env_overrides<F>(config: &mut ClientConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let set = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(id) = set(ENV_DRAGONCHAIN_ID) {
        config.credentials.dragonchain_id = id;
    }
    if let Some(key) = set(ENV_AUTH_KEY) {
        config.credentials.auth_key = key;
    }
    if let Some(key_id) = set(ENV_AUTH_KEY_ID) {
        config.credentials.auth_key_id = key_id;
    }
    if let Some(endpoint) = set(ENV_ENDPOINT) {
        config.endpoint = endpoint;
    }
}
