//! Configuration module for rip-probe
//!
//! Handles loading and managing configuration from YAML files and environment variables.

use crate::error::{ProbeError, Result};
use crate::rip::RIP_PORT;
use crate::utils::path;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default listen window in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
/// Longest accepted listen window in seconds (one day)
pub const MAX_TIMEOUT_SECS: u64 = 86_400;
/// Default receive buffer size in bytes
pub const DEFAULT_BUFFER_SIZE: usize = 512;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Destination UDP port of the request
    #[serde(default = "default_port")]
    pub port: u16,

    /// Local port the replies are read on
    #[serde(default = "default_port")]
    pub listen_port: u16,

    /// Local address to bind
    #[serde(default = "default_listen_address")]
    pub listen_address: Ipv4Addr,

    /// Listen window in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Receive buffer size in bytes
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub enable_colors: bool,

    /// Output in JSON format
    #[serde(default)]
    pub json: bool,
}

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Verbose logging
    #[serde(default)]
    pub verbose: bool,

    /// File the configuration was loaded from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl GlobalConfig {
    /// Default `env_logger` filter, used when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

// Default value functions
fn default_port() -> u16 {
    RIP_PORT
}

fn default_listen_address() -> Ipv4Addr {
    Ipv4Addr::UNSPECIFIED
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            listen_port: default_port(),
            listen_address: default_listen_address(),
            timeout_secs: default_timeout_secs(),
            buffer_size: default_buffer_size(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            enable_colors: true,
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default file and environment variables.
    ///
    /// A missing file is created with default values.
    pub fn load() -> Result<Self> {
        path::ensure_dir(&path::config_dir()?)?;
        let config_file = path::config_file()?;

        if !config_file.exists() {
            let config = Self::default();
            config.save(&config_file)?;
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from a specific file, then apply environment overrides
    pub fn load_from(config_file: &Path) -> Result<Self> {
        debug!("Loading configuration from {:?}", config_file);
        let content = fs::read_to_string(config_file)
            .map_err(|e| ProbeError::config(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| ProbeError::YamlError(format!("Failed to parse config file: {}", e)))?;
        config.global.config_path = Some(config_file.to_path_buf());

        // Override with environment variables
        config.apply_env();

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env(&mut self) {
        self.apply_overrides(|name| env::var(name).ok());
    }

    /// Apply overrides from a variable lookup
    fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        if let Some(val) = parse_override(&lookup, "RIP_PROBE_PORT") {
            self.probe.port = val;
        }
        if let Some(val) = parse_override(&lookup, "RIP_PROBE_LISTEN_PORT") {
            self.probe.listen_port = val;
        }
        if let Some(val) = parse_override(&lookup, "RIP_PROBE_TIMEOUT") {
            self.probe.timeout_secs = val;
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| ProbeError::YamlError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, yaml)
            .map_err(|e| ProbeError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

/// Look up and parse a variable, ignoring unparseable values
fn parse_override<T: FromStr, F: Fn(&str) -> Option<String>>(lookup: &F, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(val) => Some(val),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", name, raw);
            None
        }
    }
}
