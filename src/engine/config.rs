// Configuration for the colourcode shell and its display
// Every field has a default so a partial (or missing) config file is fine

use super::error::ConfigError;
use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "COLOURCODE_CONFIG";

const MIN_BOX_WIDTH: u16 = 8;

/// Result box and section layout
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Outer width of the result box including borders (default 60)
    pub box_width: u16,

    /// Width of the `-` rules around the raw copy section (default 40)
    pub rule_width: usize,

    /// Colour headings and notices with terminal styling
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            box_width: 60,
            rule_width: 40,
            color: true,
        }
    }
}

impl DisplayConfig {
    pub fn box_width(&self) -> u16 {
        self.box_width.max(MIN_BOX_WIDTH)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Try the system clipboard at startup; false skips detection entirely
    pub enabled: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Master configuration combining all colourcode settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
}

impl Config {
    /// Loads the config at `config_path`, `None` when the file does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        info!("loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    /// Loads from the default location, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(Self::config_path())?.unwrap_or_default())
    }

    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(shellexpand::tilde(&path).as_ref());
        }
        let config_dir = shellexpand::tilde("~/.config/colourcode");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}
