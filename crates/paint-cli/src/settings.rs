//! User settings, persisted as TOML.
//!
//! Settings live in the platform config folder unless `--config` points
//! elsewhere:
//! - macOS: ~/Library/Application Support/com.paint-mixer.Paint-Mixer/
//! - Windows: %APPDATA%/paint-mixer/Paint Mixer/config/
//! - Linux: ~/.config/paintmixer/

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use paint_model::WeightMode;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "paint-mixer";
const APP_NAME: &str = "Paint Mixer";
const CONFIG_FILENAME: &str = "settings.toml";
const FALLBACK_DATA_DIR: &str = "paint-mixer-data";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where recipe history and palette files are kept.
    pub data_dir: Option<PathBuf>,

    /// Weight semantics for components given without an explicit weight.
    pub default_mode: WeightMode,

    /// Batch volume (ml) used when `--volume` is not given.
    pub default_volume_ml: Option<f64>,
}

impl Settings {
    /// Resolved data directory: configured, then platform default, then a
    /// folder in the working directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
        })
    }

    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(dir) = update.data_dir {
            self.data_dir = Some(dir);
        }
        if let Some(mode) = update.default_mode {
            self.default_mode = mode;
        }
        if let Some(volume) = update.default_volume_ml {
            self.default_volume_ml = Some(volume);
        }
    }
}

/// Changes requested on the command line. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsUpdate {
    pub data_dir: Option<PathBuf>,
    pub default_mode: Option<WeightMode>,
    pub default_volume_ml: Option<f64>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.data_dir.is_none() && self.default_mode.is_none() && self.default_volume_ml.is_none()
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from [`settings_path`] when `None`.
///
/// Returns default settings if the file is missing or cannot be parsed.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match settings_path() {
            Some(path) => path,
            None => {
                tracing::warn!("Could not determine settings path, using defaults");
                return Settings::default();
            }
        },
    };

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

/// Save settings to `path`, creating the parent directory if needed.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;

    fs::write(path, content).map_err(|e| format!("Failed to write settings file: {}", e))?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config/settings.toml");
        let settings = Settings {
            data_dir: Some(PathBuf::from("/tmp/paints")),
            default_mode: WeightMode::Percent,
            default_volume_ml: Some(250.0),
        };
        save_settings(&settings, &path).unwrap();
        assert_eq!(load_settings(Some(&path)), settings);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_settings(Some(&dir.path().join("absent.toml")));
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "default_mode = \"percent\"\n").unwrap();
        let loaded = load_settings(Some(&path));
        assert_eq!(loaded.default_mode, WeightMode::Percent);
        assert_eq!(loaded.data_dir, None);
    }

    #[test]
    fn test_unparsable_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "default_mode = [").unwrap();
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_update_keeps_unset_fields() {
        let mut settings = Settings {
            data_dir: Some(PathBuf::from("paints")),
            ..Settings::default()
        };
        let update = SettingsUpdate {
            default_volume_ml: Some(500.0),
            ..SettingsUpdate::default()
        };
        assert!(!update.is_empty());
        settings.apply(update);
        assert_eq!(settings.data_dir, Some(PathBuf::from("paints")));
        assert_eq!(settings.default_mode, WeightMode::Amount);
        assert_eq!(settings.default_volume_ml, Some(500.0));
        assert!(SettingsUpdate::default().is_empty());
    }

    #[test]
    fn test_configured_data_dir_wins() {
        let settings = Settings {
            data_dir: Some(PathBuf::from("here")),
            ..Settings::default()
        };
        assert_eq!(settings.data_dir(), PathBuf::from("here"));
    }
}
