//! # Furnkit Settings
//!
//! Admin-editable catalog settings. The admin surface is versioned
//! separately from the engine, so every section of the settings file is
//! optional: whatever is present overrides the built-in catalogs, the rest
//! keeps its defaults.
//!
//! Supports JSON and TOML files stored in platform-specific directories.

mod catalog_settings;
mod error;
mod persistence;

pub use catalog_settings::{
    BandingSetting, CatalogSettings, EnvelopeSetting, HardwareSettings, MaterialSetting,
};
pub use error::{SettingsError, SettingsResult};
pub use persistence::{default_settings_path, load_or_default, SettingsPersistence};
