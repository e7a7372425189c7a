use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Current settings schema version. Older files are merged onto defaults
/// and written back with this version.
pub const CONFIG_VERSION: u32 = 2;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    /// Active language tag: "en" or "ja"
    pub language: String,
    pub panel: PanelConfig,
    pub ui: UiConfig,
}

/// Sidebar layout configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PanelConfig {
    /// Width of the shortcut panel (in pixels)
    pub width: f32,
    /// Start with two panes visible
    pub start_split: bool,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    /// Show hidden files in panes
    pub show_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: CONFIG_VERSION,
            language: "en".to_string(),
            panel: PanelConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            width: 220.0,
            start_split: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { show_hidden: false }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "michi")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration, merging older files onto current defaults.
    /// Unparseable or missing files yield defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config.migrated(),
                Err(e) => {
                    warn!("failed to parse config file, using defaults: {e}");
                    Config::default()
                }
            },
            Err(e) => {
                warn!("failed to read config file, using defaults: {e}");
                Config::default()
            }
        }
    }

    /// Versioned merge: `#[serde(default)]` already filled fields an older
    /// file does not carry, so migration is bumping the version and
    /// persisting the merged result.
    fn migrated(mut self) -> Self {
        if self.version < CONFIG_VERSION {
            self.version = CONFIG_VERSION;
            if let Err(e) = self.save() {
                warn!("failed to write migrated config: {e}");
            }
        }
        self
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(path) = Self::config_path() else {
            return Err("could not determine config directory".into());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }
}
