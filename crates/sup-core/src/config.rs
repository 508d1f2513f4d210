use crate::error::{Result, SupError};
use crate::paths;
use crate::types::Identity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// IrcConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrcConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,
    #[serde(default = "default_pattern_begin")]
    pub pattern_begin: String,
    #[serde(default = "default_pattern_discussion")]
    pub pattern_discussion: String,
    #[serde(default = "default_pattern_end")]
    pub pattern_end: String,
}

fn default_pattern_begin() -> String {
    "tandup begins".to_string()
}

fn default_pattern_discussion() -> String {
    "# Discussion".to_string()
}

fn default_pattern_end() -> String {
    "tandup ends".to_string()
}

impl Default for IrcConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            pattern_begin: default_pattern_begin(),
            pattern_discussion: default_pattern_discussion(),
            pattern_end: default_pattern_end(),
        }
    }
}

impl IrcConfig {
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir.as_deref().map(paths::expand_home)
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The invoking user, written into the header slot with `--name-header`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standup_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default)]
    pub irc: IrcConfig,
}

impl Config {
    /// Load the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(path, data.as_bytes())
    }

    /// The configured identity, or an error naming the config file to fix.
    pub fn require_identity(&self, path: &Path) -> Result<&Identity> {
        self.identity
            .as_ref()
            .ok_or_else(|| SupError::IdentityNotConfigured(path.display().to_string()))
    }

    pub fn standup_file(&self) -> Option<PathBuf> {
        self.standup_file.as_deref().map(paths::expand_home)
    }

    pub fn template(&self) -> Option<PathBuf> {
        self.template.as_deref().map(paths::expand_home)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if let Some(identity) = &self.identity {
            if identity.name.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: "identity.name is empty".to_string(),
                });
            }
            if identity.username.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: "identity.username is empty".to_string(),
                });
            }
        }

        if let Some(path) = self.standup_file() {
            if !path.exists() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("standup_file '{}' does not exist", path.display()),
                });
            }
        }

        if let Some(path) = self.template() {
            if !path.exists() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("template '{}' does not exist", path.display()),
                });
            }
        }

        for (key, pattern) in [
            ("irc.pattern_begin", &self.irc.pattern_begin),
            ("irc.pattern_discussion", &self.irc.pattern_discussion),
            ("irc.pattern_end", &self.irc.pattern_end),
        ] {
            // An empty pattern matches every line, so the last line wins.
            if pattern.is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("{key} is empty and matches every log line"),
                });
            }
        }

        if let Some(dir) = self.irc.log_dir() {
            if !dir.is_dir() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("irc.log_dir '{}' is not a directory", dir.display()),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
