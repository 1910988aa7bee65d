//! Module and hardware catalogs for free-form furniture.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Internal fitting kinds a cabinet can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Fixed shelf
    Etagere,
    /// Drawer box with front
    Tiroir,
    /// Hanging rail
    Penderie,
    /// Open niche
    Niche,
    /// Door leaf
    Porte,
}

impl ModuleKind {
    /// All kinds, in catalog display order.
    pub const ALL: [ModuleKind; 5] = [
        ModuleKind::Etagere,
        ModuleKind::Tiroir,
        ModuleKind::Penderie,
        ModuleKind::Niche,
        ModuleKind::Porte,
    ];
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Etagere => write!(f, "Étagère"),
            Self::Tiroir => write!(f, "Tiroir"),
            Self::Penderie => write!(f, "Penderie"),
            Self::Niche => write!(f, "Niche"),
            Self::Porte => write!(f, "Porte"),
        }
    }
}

/// Catalog descriptor for one module kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleEntry {
    /// Display label
    pub label: String,
    /// Base price per instance in €
    pub base_price: f64,
    /// Default height when instantiated, in mm
    pub default_height_mm: f64,
}

/// Module price catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleCatalog {
    entries: HashMap<ModuleKind, ModuleEntry>,
}

impl ModuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ModuleKind, entry: ModuleEntry) {
        self.entries.insert(kind, entry);
    }

    pub fn get(&self, kind: ModuleKind) -> Option<&ModuleEntry> {
        self.entries.get(&kind)
    }

    /// Base price for a module kind, or 0 when the catalog has no entry.
    pub fn price_or_zero(&self, kind: ModuleKind) -> f64 {
        match self.entries.get(&kind) {
            Some(entry) => entry.base_price,
            None => {
                tracing::warn!("No catalog entry for module kind {kind}, pricing at 0");
                0.0
            }
        }
    }

    /// Default height for a module kind, in mm.
    pub fn default_height_or(&self, kind: ModuleKind, fallback_mm: f64) -> f64 {
        self.entries
            .get(&kind)
            .map(|e| e.default_height_mm)
            .unwrap_or(fallback_mm)
    }
}

/// Handle styles selectable across a whole configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum HandleStyle {
    /// No handle (push-to-open fronts)
    #[default]
    None,
    /// Round knob
    Bouton,
    /// Bar handle
    Poignee,
    /// Shell handle
    Coquille,
    /// Integrated profile
    Profil,
}

impl std::fmt::Display for HandleStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "Sans poignée"),
            Self::Bouton => write!(f, "Bouton"),
            Self::Poignee => write!(f, "Poignée barre"),
            Self::Coquille => write!(f, "Coquille"),
            Self::Profil => write!(f, "Profil intégré"),
        }
    }
}

/// Unit prices for hardware items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareCatalog {
    /// Hinge price per unit in € (3 hinges fitted per door)
    pub hinge_price: f64,
    /// Drawer slide price per pair in €
    pub slide_price: f64,
    /// Shelf support price per set of 4 in €
    pub shelf_support_price: f64,
    /// Handle price per unit, by style
    pub handle_prices: HashMap<HandleStyle, f64>,
}

impl HardwareCatalog {
    /// Handle unit price for a style; `HandleStyle::None` is free,
    /// unlisted styles fall back to the bar-handle price.
    pub fn handle_price(&self, style: HandleStyle) -> f64 {
        if style == HandleStyle::None {
            return 0.0;
        }
        self.handle_prices.get(&style).copied().unwrap_or(6.0)
    }
}

impl Default for HardwareCatalog {
    fn default() -> Self {
        let mut handles = HashMap::new();
        handles.insert(HandleStyle::Bouton, 4.0);
        handles.insert(HandleStyle::Poignee, 6.0);
        handles.insert(HandleStyle::Coquille, 7.5);
        handles.insert(HandleStyle::Profil, 9.0);

        Self {
            hinge_price: 4.5,
            slide_price: 12.0,
            shelf_support_price: 0.8,
            handle_prices: handles,
        }
    }
}

/// Initialize the standard module catalog.
pub fn standard_modules() -> ModuleCatalog {
    let mut catalog = ModuleCatalog::new();
    catalog.add(
        ModuleKind::Etagere,
        ModuleEntry {
            label: "Étagère fixe".to_string(),
            base_price: 15.0,
            default_height_mm: 19.0,
        },
    );
    catalog.add(
        ModuleKind::Tiroir,
        ModuleEntry {
            label: "Tiroir coulissant".to_string(),
            base_price: 45.0,
            default_height_mm: 150.0,
        },
    );
    catalog.add(
        ModuleKind::Penderie,
        ModuleEntry {
            label: "Tringle penderie".to_string(),
            base_price: 25.0,
            default_height_mm: 30.0,
        },
    );
    catalog.add(
        ModuleKind::Niche,
        ModuleEntry {
            label: "Niche ouverte".to_string(),
            base_price: 10.0,
            default_height_mm: 400.0,
        },
    );
    catalog.add(
        ModuleKind::Porte,
        ModuleEntry {
            label: "Porte".to_string(),
            base_price: 45.0,
            default_height_mm: 0.0,
        },
    );
    catalog
}
