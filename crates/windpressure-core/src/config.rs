//! Configuration loading for the overlay.
//!
//! Values come from (highest precedence first) `WINDPRESSURE_` environment
//! variables, a TOML file in X-Plane's preferences folder, then defaults.
//! The hotkey itself is fixed and not part of the configuration.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::panel::PanelRect;

// Lives in Output/preferences
pub const CONFIG_FILE_NAME: &str = "WindPressure.toml";

// e.g. WINDPRESSURE_DISPLAY_SECONDS=8
pub const ENV_PREFIX: &str = "WINDPRESSURE_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub panel: PanelConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// How long the panel stays up after the hotkey, in seconds.
    pub seconds: u32,
}

/// Window geometry in host screen coordinates (origin bottom left).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { seconds: 5 }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            left: 50,
            top: 600,
            right: 250,
            bottom: 550,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration, reading `config_file` if it exists.
    pub fn load_from(config_file: &Path) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn config_path(xplane_root: &Path) -> PathBuf {
        xplane_root
            .join("Output")
            .join("preferences")
            .join(CONFIG_FILE_NAME)
    }

    // Reports the first problem only.
    pub fn validate(&self) -> Result<()> {
        if self.display.seconds == 0 {
            return Err(Error::validation("display.seconds must be greater than 0"));
        }

        let p = &self.panel;
        if p.left >= p.right {
            return Err(Error::validation(format!(
                "panel.left ({}) must be less than panel.right ({})",
                p.left, p.right
            )));
        }
        if p.bottom >= p.top {
            return Err(Error::validation(format!(
                "panel.bottom ({}) must be less than panel.top ({})",
                p.bottom, p.top
            )));
        }

        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<LevelFilter> {
        self.log
            .level
            .parse()
            .map_err(|_| Error::validation(format!("unknown log.level: {}", self.log.level)))
    }

    pub fn panel_rect(&self) -> PanelRect {
        PanelRect {
            left: self.panel.left,
            top: self.panel.top,
            right: self.panel.right,
            bottom: self.panel.bottom,
        }
    }
}
