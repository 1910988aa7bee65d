//! Settings file I/O.
//!
//! Files live in the platform config directory and may be JSON or TOML;
//! the extension picks the format, as in the rest of the tooling the admin
//! surface ships with.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::catalog_settings::CatalogSettings;
use crate::error::{SettingsError, SettingsResult};

/// Default location of the catalog settings file.
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("furnkit")
        .join("catalogs.json")
}

/// Loads settings, falling back to the empty document when the file is
/// missing or unreadable. A malformed file is logged, not fatal — the
/// engine must come up with its built-in catalogs regardless.
pub fn load_or_default(path: &Path) -> CatalogSettings {
    match SettingsPersistence::load(path) {
        Ok(settings) => settings,
        Err(SettingsError::Io(error)) if error.kind() == std::io::ErrorKind::NotFound => {
            info!("No settings file at {}, using defaults", path.display());
            CatalogSettings::default()
        }
        Err(error) => {
            warn!("Failed to load settings from {}: {error}", path.display());
            CatalogSettings::default()
        }
    }
}

/// File-based load/save for the settings document.
pub struct SettingsPersistence;

impl SettingsPersistence {
    /// Loads and validates a settings file (JSON or TOML by extension).
    pub fn load(path: &Path) -> SettingsResult<CatalogSettings> {
        let content = std::fs::read_to_string(path)?;

        let settings: CatalogSettings = if has_extension(path, "json") {
            serde_json::from_str(&content)?
        } else if has_extension(path, "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat {
                path: path.display().to_string(),
            });
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validates and writes a settings file (JSON or TOML by extension).
    /// Parent directories are created as needed.
    pub fn save(settings: &CatalogSettings, path: &Path) -> SettingsResult<()> {
        settings.validate()?;

        let content = if has_extension(path, "json") {
            serde_json::to_string_pretty(settings)?
        } else if has_extension(path, "toml") {
            toml::to_string_pretty(settings)?
        } else {
            return Err(SettingsError::UnsupportedFormat {
                path: path.display().to_string(),
            });
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}
