//! Path utilities for the configuration file
//!
//! Handles XDG directory specifications and path resolution.

use crate::error::{ProbeError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Get the rip-probe configuration directory
///
/// Priority:
/// 1. RIP_PROBE_CONFIG_HOME environment variable
/// 2. RIP_PROBE_HOME environment variable
/// 3. XDG_CONFIG_HOME/rip-probe
/// 4. ~/.config/rip-probe (fallback)
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var("RIP_PROBE_CONFIG_HOME") {
        return Ok(PathBuf::from(path));
    }

    if let Ok(path) = env::var("RIP_PROBE_HOME") {
        return Ok(PathBuf::from(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("rip-probe"));
    }

    Err(ProbeError::config("Cannot determine configuration directory"))
}

/// Get the path to the config file
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.yaml"))
}

/// Ensure directory exists, create if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .map_err(|e| ProbeError::config(format!("Failed to create directory: {}", e)))?;
    }
    Ok(())
}

/// Expand tilde (~) in path
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_home_takes_priority() {
        let tmp = tempfile::tempdir().unwrap();

        // SAFETY: no other test reads or writes this variable
        unsafe { env::set_var("RIP_PROBE_CONFIG_HOME", tmp.path()) };
        let dir = config_dir();
        let file = config_file();
        unsafe { env::remove_var("RIP_PROBE_CONFIG_HOME") };

        assert_eq!(dir.unwrap(), tmp.path());
        assert_eq!(file.unwrap(), tmp.path().join("config.yaml"));
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        let expanded = expand_tilde("~/rip.yaml");
        match dirs::home_dir() {
            Some(home) => assert_eq!(expanded, home.join("rip.yaml")),
            None => assert_eq!(expanded, PathBuf::from("~/rip.yaml")),
        }
    }

    #[test]
    fn test_expand_plain_path() {
        assert_eq!(expand_tilde("/etc/rip.yaml"), PathBuf::from("/etc/rip.yaml"));
        assert_eq!(expand_tilde("~other/rip.yaml"), PathBuf::from("~other/rip.yaml"));
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
