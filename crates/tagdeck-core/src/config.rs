//! Configuration management for tagdeck.
//!
//! Loads configuration from ${TAGDECK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Host environment the panel runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    /// Native desktop shell (supports the AI settings tab).
    #[default]
    Desktop,
    /// Browser build.
    Web,
}

impl HostKind {
    pub fn is_desktop(self) -> bool {
        matches!(self, HostKind::Desktop)
    }
}

/// Runtime capability flags gating optional tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Capabilities {
    pub dev_mode: bool,
    /// Licensed feature set is available.
    pub pro: bool,
    pub host: HostKind,
}

/// Entry panel startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<usize>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            open: true,
            tab: None,
        }
    }
}

/// Sign-in bootstrap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Access token claim carrying the tenant groups.
    pub group_claim: String,
    /// Generated query document for the tenant configuration fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queries_file: Option<PathBuf>,
}

impl AuthConfig {
    pub const DEFAULT_GROUP_CLAIM: &'static str = "cognito:groups";
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            group_claim: Self::DEFAULT_GROUP_CLAIM.to_string(),
            queries_file: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive when `TAGDECK_LOG` is unset.
    pub level: String,
    /// Directory for rolling log files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

pub mod paths {
    //! Path resolution for tagdeck configuration and data directories.
    //!
    //! TAGDECK_HOME resolution order:
    //! 1. TAGDECK_HOME environment variable (if set)
    //! 2. ~/.config/tagdeck (default)
    //! 3. ./.tagdeck when no home directory can be determined

    use std::env;
    use std::path::PathBuf;

    pub fn tagdeck_home() -> PathBuf {
        if let Ok(home) = env::var("TAGDECK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".tagdeck"),
            |h| h.join(".config").join("tagdeck"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        tagdeck_home().join("config.toml")
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub capabilities: Capabilities,
    pub panel: PanelConfig,
    pub auth: AuthConfig,
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path`.
    ///
    /// Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Capability context consumed by the tab controller.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
