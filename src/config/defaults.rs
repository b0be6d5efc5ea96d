// src/config/defaults.rs
use crate::config::app::{LoggingConfig, OutputConfig, RotorConfig};

pub const DEFAULT_CONFIG_PATH: &str = "cipher-config.toml";
pub const CONFIG_ENV_VAR: &str = "CCE_CONFIG";

pub const DEFAULT_ALPHABET_LENGTH: usize = 5;
pub const DEFAULT_ROTOR_COUNT: usize = 3;
pub const DEFAULT_LOG_FILTER: &str = "info";

impl Default for RotorConfig {
    fn default() -> Self {
        Self {
            alphabet_length: DEFAULT_ALPHABET_LENGTH,
            rotor_count: DEFAULT_ROTOR_COUNT,
            start_position: 0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            include_steps: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}
