// src/config/mod.rs
//! Configuration system for the cipher engine
//!
//! Central, lazy-loaded global config with TOML + env overrides.
//! Cipher functions never read it; only callers such as the batch binary do.

pub use app::{from_path, from_toml_str, load, Config, LoggingConfig, OutputConfig, RotorConfig};

mod app;
mod defaults;
