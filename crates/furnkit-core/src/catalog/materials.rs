//! Material, edge banding, and finish price tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Material identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct MaterialKey(pub String);

impl MaterialKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl std::fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A panel material with its quoted price and display color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// Unique material identifier
    pub key: MaterialKey,
    /// Display name
    pub name: String,
    /// Price in €/m²
    pub price_per_m2: f64,
    /// Display color as linear RGB
    pub color: [f32; 3],
}

/// Neutral color applied when a material lookup misses.
pub const FALLBACK_COLOR: [f32; 3] = [0.76, 0.68, 0.55];

/// Materials catalog - manages the material price table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialCatalog {
    materials: HashMap<MaterialKey, MaterialEntry>,
}

impl MaterialCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material to the catalog
    pub fn add(&mut self, entry: MaterialEntry) {
        self.materials.insert(entry.key.clone(), entry);
    }

    /// Get a material by key
    pub fn get(&self, key: &MaterialKey) -> Option<&MaterialEntry> {
        self.materials.get(key)
    }

    /// Price per m² for a material, or 0 when the key is unknown.
    ///
    /// Keys originate from a separately-versioned admin surface, so a
    /// missing entry is tolerated, never an error.
    pub fn price_or_zero(&self, key: &MaterialKey) -> f64 {
        match self.materials.get(key) {
            Some(entry) => entry.price_per_m2,
            None => {
                tracing::warn!("Unknown material '{}', pricing at 0", key);
                0.0
            }
        }
    }

    /// Display color for a material, or the neutral fallback.
    pub fn color_or_default(&self, key: &MaterialKey) -> [f32; 3] {
        self.materials
            .get(key)
            .map(|e| e.color)
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Display name for a material, or the raw key when unknown.
    pub fn name_or_key(&self, key: &MaterialKey) -> String {
        self.materials
            .get(key)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| key.0.clone())
    }

    /// Get all materials
    pub fn all(&self) -> Vec<&MaterialEntry> {
        self.materials.values().collect()
    }

    /// Get the number of materials in the catalog
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// Edge banding identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct BandingKey(pub String);

impl BandingKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl std::fmt::Display for BandingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge banding price table (€/m).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeBandingCatalog {
    prices: HashMap<BandingKey, f64>,
}

impl EdgeBandingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: BandingKey, price_per_m: f64) {
        self.prices.insert(key, price_per_m);
    }

    /// Price per metre for a banding, or 0 when the key is unknown.
    pub fn price_or_zero(&self, key: &BandingKey) -> f64 {
        match self.prices.get(key) {
            Some(price) => *price,
            None => {
                tracing::warn!("Unknown edge banding '{}', pricing at 0", key);
                0.0
            }
        }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Finish identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct FinishKey(pub String);

impl FinishKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl std::fmt::Display for FinishKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Surface finish price table (€/m²).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinishCatalog {
    prices: HashMap<FinishKey, f64>,
}

impl FinishCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: FinishKey, price_per_m2: f64) {
        self.prices.insert(key, price_per_m2);
    }

    /// Price per m² for a finish, or 0 when the key is unknown.
    pub fn price_or_zero(&self, key: &FinishKey) -> f64 {
        match self.prices.get(key) {
            Some(price) => *price,
            None => {
                tracing::warn!("Unknown finish '{}', pricing at 0", key);
                0.0
            }
        }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Initialize the standard material price table.
pub fn standard_materials() -> MaterialCatalog {
    let mut catalog = MaterialCatalog::new();

    // Solid woods
    catalog.add(MaterialEntry {
        key: MaterialKey::new("chene"),
        name: "Chêne massif".to_string(),
        price_per_m2: 45.0,
        color: [0.72, 0.56, 0.36],
    });
    catalog.add(MaterialEntry {
        key: MaterialKey::new("hetre"),
        name: "Hêtre massif".to_string(),
        price_per_m2: 38.0,
        color: [0.82, 0.68, 0.50],
    });
    catalog.add(MaterialEntry {
        key: MaterialKey::new("noyer"),
        name: "Noyer massif".to_string(),
        price_per_m2: 72.0,
        color: [0.43, 0.30, 0.22],
    });
    catalog.add(MaterialEntry {
        key: MaterialKey::new("pin"),
        name: "Pin".to_string(),
        price_per_m2: 22.0,
        color: [0.87, 0.74, 0.53],
    });

    // Panels
    catalog.add(MaterialEntry {
        key: MaterialKey::new("mdf"),
        name: "MDF".to_string(),
        price_per_m2: 12.0,
        color: [0.69, 0.60, 0.48],
    });
    catalog.add(MaterialEntry {
        key: MaterialKey::new("melamine"),
        name: "Mélaminé blanc".to_string(),
        price_per_m2: 18.0,
        color: [0.93, 0.92, 0.90],
    });

    // Worktop materials
    catalog.add(MaterialEntry {
        key: MaterialKey::new("plan-stratifie"),
        name: "Plan stratifié".to_string(),
        price_per_m2: 40.0,
        color: [0.35, 0.33, 0.31],
    });
    catalog.add(MaterialEntry {
        key: MaterialKey::new("plan-bois"),
        name: "Plan bois massif".to_string(),
        price_per_m2: 80.0,
        color: [0.66, 0.50, 0.33],
    });
    catalog.add(MaterialEntry {
        key: MaterialKey::new("plan-quartz"),
        name: "Plan quartz".to_string(),
        price_per_m2: 120.0,
        color: [0.85, 0.84, 0.82],
    });

    catalog
}

/// Initialize the standard edge banding price table.
pub fn standard_banding() -> EdgeBandingCatalog {
    let mut catalog = EdgeBandingCatalog::new();
    catalog.add(BandingKey::new("assorti"), 2.0);
    catalog.add(BandingKey::new("abs"), 1.2);
    catalog
}

/// Initialize the standard finish price table.
pub fn standard_finishes() -> FinishCatalog {
    let mut catalog = FinishCatalog::new();
    catalog.add(FinishKey::new("brut"), 0.0);
    catalog.add(FinishKey::new("huile"), 8.0);
    catalog.add(FinishKey::new("vernis"), 12.0);
    catalog.add(FinishKey::new("laque"), 25.0);
    catalog
}
