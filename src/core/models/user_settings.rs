use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CaptureSourceKind {
    #[default]
    Screen,
    Gallery,
}

impl fmt::Display for CaptureSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureSourceKind::Screen => write!(f, "Screen"),
            CaptureSourceKind::Gallery => write!(f, "Gallery"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub capture_source: CaptureSourceKind,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

fn default_endpoint_url() -> String {
    global_constants::DETECTION_ENDPOINT_URL.to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            api_key: global_constants::DEFAULT_API_KEY.to_string(),
            capture_source: CaptureSourceKind::default(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "{} No settings file found, using defaults",
                global_constants::LOG_TAG_SETTINGS
            );
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!(
            "{} Loaded settings from {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} Endpoint: {}, capture source: {}",
            global_constants::LOG_TAG_SETTINGS,
            settings.endpoint_url,
            settings.capture_source
        );

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!(
            "{} Saved settings to {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
