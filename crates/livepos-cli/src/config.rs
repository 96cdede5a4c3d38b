//! TOML configuration for the CLI.
//!
//! The config file is optional; everything has a working default. The
//! session directory resolves in order: `--data-dir` flag (or
//! `LIVEPOS_DATA_DIR`), then `[store] dir` from the config file, then the
//! XDG data directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PosConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    /// Directory holding session CSV files.
    pub dir: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    /// Force colored output on or off; unset defers to TTY detection.
    pub color: Option<bool>,
}

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("LIVEPOS_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("sessions"))
}

pub fn read_config(path: &Path) -> anyhow::Result<PosConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("livepos"));
        }
    }
    Ok(home_dir()?.join(".config").join("livepos"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("livepos"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("livepos"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_default() {
        let config: PosConfig = toml::from_str("").unwrap();
        assert!(config.store.dir.is_none());
        assert!(config.ui.color.is_none());
    }

    #[test]
    fn test_store_dir_parses() {
        let config: PosConfig = toml::from_str("[store]\ndir = \"/tmp/sessions\"\n").unwrap();
        assert_eq!(config.store.dir.as_deref(), Some("/tmp/sessions"));
    }
}
