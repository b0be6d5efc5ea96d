// src/config/app.rs
use super::defaults::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

use crate::cipher::generate_random_keys;
use crate::core::Result;
use crate::enums::Mode;
use crate::request::CipherRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rotor: RotorConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Defaults used when generating configurable-rotor keys
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RotorConfig {
    pub alphabet_length: usize,
    pub rotor_count: usize,
    pub start_position: usize,
}

impl RotorConfig {
    /// Rotor request over `text` with fresh random keys and these settings
    pub fn random_request(&self, text: &str, mode: Mode) -> Result<CipherRequest> {
        Ok(CipherRequest::Rotor {
            text: text.to_owned(),
            rotor_count: self.rotor_count,
            start_position: self.start_position,
            keys: generate_random_keys(self.rotor_count, self.alphabet_length)?,
            alphabet_length: self.alphabet_length,
            mode,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
    pub include_steps: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn from_toml_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Load config once — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            return Config::default();
        }

        match from_path(&config_path) {
            Ok(conf) => conf,
            Err(err) => {
                warn!(
                    path = %config_path,
                    error = %err,
                    "ignoring config, using built-in defaults"
                );
                Config::default()
            }
        }
    })
}
