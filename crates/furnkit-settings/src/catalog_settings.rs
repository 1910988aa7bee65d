//! The admin-editable settings document and its merge into the catalogs.

use std::collections::HashMap;

use furnkit_core::catalog::{
    BandingKey, CatalogSet, DimRange, FinishKey, MaterialEntry, MaterialKey, ModuleKind,
};
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// One material row of the admin table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSetting {
    pub key: String,
    pub name: String,
    pub price_per_m2: f64,
    /// Linear RGB; omitted entries keep the neutral fallback color
    #[serde(default)]
    pub color: Option<[f32; 3]>,
}

/// One edge banding row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandingSetting {
    pub key: String,
    pub price_per_m: f64,
}

/// Hardware unit price overrides; absent fields keep the defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HardwareSettings {
    #[serde(default)]
    pub hinge_price: Option<f64>,
    #[serde(default)]
    pub slide_price: Option<f64>,
    #[serde(default)]
    pub shelf_support_price: Option<f64>,
}

/// A dimensional range override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeSetting {
    pub min_mm: f64,
    pub max_mm: f64,
}

impl From<EnvelopeSetting> for DimRange {
    fn from(setting: EnvelopeSetting) -> Self {
        DimRange::new(setting.min_mm, setting.max_mm)
    }
}

/// The full settings document. Every section is optional: the admin surface
/// is versioned independently of the engine, so any subset may be absent
/// and the built-in defaults fill the gaps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub materials: Vec<MaterialSetting>,
    /// Module base prices keyed by kind name ("etagere", "tiroir", ...)
    #[serde(default)]
    pub module_prices: HashMap<String, f64>,
    #[serde(default)]
    pub hardware: Option<HardwareSettings>,
    #[serde(default)]
    pub banding: Vec<BandingSetting>,
    /// Finish prices in €/m² keyed by finish name
    #[serde(default)]
    pub finishes: HashMap<String, f64>,
    #[serde(default)]
    pub meuble_width: Option<EnvelopeSetting>,
    #[serde(default)]
    pub meuble_height: Option<EnvelopeSetting>,
    #[serde(default)]
    pub meuble_depth: Option<EnvelopeSetting>,
    /// UI label strings keyed by slot name
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl CatalogSettings {
    /// Validates prices and ranges. Unknown keys are not an error here;
    /// they are tolerated (and warned about) at merge time.
    pub fn validate(&self) -> SettingsResult<()> {
        for material in &self.materials {
            if !material.price_per_m2.is_finite() || material.price_per_m2 < 0.0 {
                return Err(SettingsError::Invalid {
                    field: format!("materials.{}", material.key),
                    reason: format!("price {} must be >= 0", material.price_per_m2),
                });
            }
        }
        for banding in &self.banding {
            if !banding.price_per_m.is_finite() || banding.price_per_m < 0.0 {
                return Err(SettingsError::Invalid {
                    field: format!("banding.{}", banding.key),
                    reason: format!("price {} must be >= 0", banding.price_per_m),
                });
            }
        }
        for (key, price) in self.module_prices.iter().chain(self.finishes.iter()) {
            if !price.is_finite() || *price < 0.0 {
                return Err(SettingsError::Invalid {
                    field: key.clone(),
                    reason: format!("price {price} must be >= 0"),
                });
            }
        }
        for (field, envelope) in [
            ("meuble_width", self.meuble_width),
            ("meuble_height", self.meuble_height),
            ("meuble_depth", self.meuble_depth),
        ] {
            if let Some(range) = envelope {
                if range.min_mm > range.max_mm || range.min_mm < 0.0 {
                    return Err(SettingsError::Invalid {
                        field: field.to_string(),
                        reason: format!("range [{}, {}]", range.min_mm, range.max_mm),
                    });
                }
            }
        }
        Ok(())
    }

    /// Merges the present sections into a catalog set. Sections that are
    /// absent leave the corresponding catalog untouched.
    pub fn apply_to(&self, catalogs: &mut CatalogSet) {
        for material in &self.materials {
            let key = MaterialKey::new(material.key.clone());
            let color = material.color.unwrap_or_else(|| {
                catalogs.materials.color_or_default(&key)
            });
            catalogs.materials.add(MaterialEntry {
                key,
                name: material.name.clone(),
                price_per_m2: material.price_per_m2,
                color,
            });
        }

        for (name, price) in &self.module_prices {
            match module_kind_from_name(name) {
                Some(kind) => {
                    if let Some(entry) = catalogs.modules.get(kind) {
                        let mut entry = entry.clone();
                        entry.base_price = *price;
                        catalogs.modules.add(kind, entry);
                    }
                }
                None => tracing::warn!("Unknown module kind '{name}' in settings, skipping"),
            }
        }

        if let Some(hardware) = &self.hardware {
            if let Some(price) = hardware.hinge_price {
                catalogs.hardware.hinge_price = price;
            }
            if let Some(price) = hardware.slide_price {
                catalogs.hardware.slide_price = price;
            }
            if let Some(price) = hardware.shelf_support_price {
                catalogs.hardware.shelf_support_price = price;
            }
        }

        for banding in &self.banding {
            catalogs
                .banding
                .add(BandingKey::new(banding.key.clone()), banding.price_per_m);
        }

        for (name, price) in &self.finishes {
            catalogs.finishes.add(FinishKey::new(name.clone()), *price);
        }

        if let Some(range) = self.meuble_width {
            catalogs.envelopes.meuble.width = range.into();
        }
        if let Some(range) = self.meuble_height {
            catalogs.envelopes.meuble.height = range.into();
        }
        if let Some(range) = self.meuble_depth {
            catalogs.envelopes.meuble.depth = range.into();
        }
    }
}

fn module_kind_from_name(name: &str) -> Option<ModuleKind> {
    match name {
        "etagere" => Some(ModuleKind::Etagere),
        "tiroir" => Some(ModuleKind::Tiroir),
        "penderie" => Some(ModuleKind::Penderie),
        "niche" => Some(ModuleKind::Niche),
        "porte" => Some(ModuleKind::Porte),
        _ => None,
    }
}
