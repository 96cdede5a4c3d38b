//! Application context for the Livepos CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config so
//! handlers do not each re-resolve paths and settings.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use livepos_core::SessionStore;

use crate::cli::Cli;
use crate::config::{default_data_dir, read_config, resolve_config_path, PosConfig};
use crate::ui::UiContext;

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<PosConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Config file contents, loaded once. A missing file reads as defaults.
    pub fn config(&self) -> anyhow::Result<&PosConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                read_config(&path)
            } else {
                Ok(PosConfig::default())
            }
        })
    }

    /// Resolve the session directory: flag/env, then config, then default.
    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(dir) = self.cli.data_dir.clone() {
            return Ok(dir);
        }
        if let Some(dir) = self.config()?.store.dir.as_deref() {
            return Ok(PathBuf::from(dir));
        }
        default_data_dir()
    }

    /// The session store rooted at the resolved data directory.
    pub fn store(&self) -> anyhow::Result<SessionStore> {
        Ok(SessionStore::new(self.data_dir()?))
    }

    /// Build a UI context from per-command output flags plus global ones.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        let config_color = self
            .config()
            .ok()
            .and_then(|config| config.ui.color)
            .unwrap_or(true);
        UiContext::from_env(
            json,
            format,
            self.cli.no_color || !config_color,
            self.cli.ascii,
        )
    }
}
