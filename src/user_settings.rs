use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
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

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserSettings {
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub download_directory_override: Option<PathBuf>,
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Theme mode: {}", settings.theme_mode);
        log::debug!(
            "[SETTINGS] Download directory override: {:?}",
            settings.download_directory_override
        );

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_default_is_dark() {
        let default_theme = ThemeMode::default();
        assert_eq!(default_theme, ThemeMode::Dark);
    }

    #[test]
    fn test_theme_mode_display() {
        assert_eq!(format!("{}", ThemeMode::Dark), "Dark");
        assert_eq!(format!("{}", ThemeMode::Light), "Light");
    }

    #[test]
    fn test_user_settings_default_has_no_directory_override() {
        let settings = UserSettings::default();

        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert!(settings.download_directory_override.is_none());
    }

    #[test]
    fn test_user_settings_serialization_roundtrip() {
        let settings = UserSettings {
            theme_mode: ThemeMode::Light,
            download_directory_override: Some(PathBuf::from("/tmp/exports")),
        };

        let serialized = serde_json::to_string(&settings).unwrap();
        let deserialized: UserSettings = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.theme_mode, settings.theme_mode);
        assert_eq!(
            deserialized.download_directory_override,
            settings.download_directory_override
        );
    }

    #[test]
    fn test_user_settings_deserialization_with_missing_override_field() {
        let json = r#"{ "theme_mode": "Dark" }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();
        assert!(settings.download_directory_override.is_none());
    }
}
