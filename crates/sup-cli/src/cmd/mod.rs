pub mod config;
pub mod edit;
pub mod format;
pub mod init;
pub mod list;
pub mod members;
pub mod show;

use crate::locate;
use anyhow::Context;
use std::path::{Path, PathBuf};
use sup_core::{config::Config, standup, types::StandupRecord};

/// Everything a command needs from the global options and the config file.
pub struct Session {
    pub config_path: PathBuf,
    pub config: Config,
    pub file: Option<PathBuf>,
    pub json: bool,
}

impl Session {
    pub fn load(config: Option<&Path>, file: Option<PathBuf>, json: bool) -> anyhow::Result<Self> {
        let config_path = locate::resolve_config_path(config)?;
        let config = Config::load(&config_path)
            .with_context(|| format!("failed to load config {}", config_path.display()))?;
        tracing::debug!(config = %config_path.display(), "loaded config");
        Ok(Self {
            config_path,
            config,
            file,
            json,
        })
    }

    pub fn standup_file(&self) -> anyhow::Result<PathBuf> {
        let path = locate::resolve_standup_file(self.file.as_deref(), &self.config)?;
        tracing::debug!(file = %path.display(), "using standup file");
        Ok(path)
    }

    pub fn records(&self) -> anyhow::Result<Vec<StandupRecord>> {
        let path = self.standup_file()?;
        standup::load_records(&path)
            .with_context(|| format!("failed to load standup file {}", path.display()))
    }
}
