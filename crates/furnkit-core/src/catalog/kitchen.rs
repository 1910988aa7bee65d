//! Kitchen cabinet catalogs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a kitchen cabinet mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum KitchenCabinetKind {
    /// Floor-standing, carries the countertop
    Base,
    /// Wall-hung
    Wall,
    /// Full-height column
    Tall,
}

impl std::fmt::Display for KitchenCabinetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "Meuble bas"),
            Self::Wall => write!(f, "Meuble haut"),
            Self::Tall => write!(f, "Colonne"),
        }
    }
}

/// Catalog descriptor for one kitchen cabinet reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitchenCabinetEntry {
    /// Display label
    pub label: String,
    /// Mounting kind
    pub kind: KitchenCabinetKind,
    /// Base price at the default width, in €
    pub base_price: f64,
    /// Width the base price is quoted for, in mm
    pub default_width_mm: f64,
    /// Widths offered by the range, in mm
    pub allowed_widths_mm: Vec<f64>,
    /// Whether the front carries a door (drives hinge/handle counts)
    pub has_door: bool,
    /// Whether the front carries drawers (drives slide/handle counts)
    pub has_drawer: bool,
}

/// Kitchen cabinet catalog keyed by reference string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KitchenCatalog {
    entries: HashMap<String, KitchenCabinetEntry>,
}

impl KitchenCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: impl Into<String>, entry: KitchenCabinetEntry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&KitchenCabinetEntry> {
        self.entries.get(key)
    }

    /// All entries of a given kind, sorted by key for stable display order.
    pub fn by_kind(&self, kind: KitchenCabinetKind) -> Vec<(&String, &KitchenCabinetEntry)> {
        let mut entries: Vec<_> = self.entries.iter().filter(|(_, e)| e.kind == kind).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Initialize the standard kitchen cabinet catalog.
pub fn standard_kitchen() -> KitchenCatalog {
    let mut catalog = KitchenCatalog::new();

    catalog.add(
        "bas-porte",
        KitchenCabinetEntry {
            label: "Bas 1 porte".to_string(),
            kind: KitchenCabinetKind::Base,
            base_price: 120.0,
            default_width_mm: 600.0,
            allowed_widths_mm: vec![400.0, 500.0, 600.0, 800.0],
            has_door: true,
            has_drawer: false,
        },
    );
    catalog.add(
        "bas-tiroirs",
        KitchenCabinetEntry {
            label: "Bas 3 tiroirs".to_string(),
            kind: KitchenCabinetKind::Base,
            base_price: 180.0,
            default_width_mm: 600.0,
            allowed_widths_mm: vec![400.0, 500.0, 600.0, 800.0],
            has_door: false,
            has_drawer: true,
        },
    );
    catalog.add(
        "bas-angle",
        KitchenCabinetEntry {
            label: "Bas d'angle".to_string(),
            kind: KitchenCabinetKind::Base,
            base_price: 210.0,
            default_width_mm: 900.0,
            allowed_widths_mm: vec![900.0, 1000.0],
            has_door: true,
            has_drawer: false,
        },
    );
    catalog.add(
        "bas-evier",
        KitchenCabinetEntry {
            label: "Sous-évier".to_string(),
            kind: KitchenCabinetKind::Base,
            base_price: 140.0,
            default_width_mm: 800.0,
            allowed_widths_mm: vec![600.0, 800.0, 1000.0],
            has_door: true,
            has_drawer: false,
        },
    );
    catalog.add(
        "haut-porte",
        KitchenCabinetEntry {
            label: "Haut 1 porte".to_string(),
            kind: KitchenCabinetKind::Wall,
            base_price: 90.0,
            default_width_mm: 600.0,
            allowed_widths_mm: vec![300.0, 400.0, 600.0, 800.0],
            has_door: true,
            has_drawer: false,
        },
    );
    catalog.add(
        "haut-vitre",
        KitchenCabinetEntry {
            label: "Haut vitré".to_string(),
            kind: KitchenCabinetKind::Wall,
            base_price: 130.0,
            default_width_mm: 600.0,
            allowed_widths_mm: vec![400.0, 600.0],
            has_door: true,
            has_drawer: false,
        },
    );
    catalog.add(
        "colonne-four",
        KitchenCabinetEntry {
            label: "Colonne four".to_string(),
            kind: KitchenCabinetKind::Tall,
            base_price: 260.0,
            default_width_mm: 600.0,
            allowed_widths_mm: vec![600.0],
            has_door: true,
            has_drawer: true,
        },
    );
    catalog.add(
        "colonne-frigo",
        KitchenCabinetEntry {
            label: "Colonne réfrigérateur".to_string(),
            kind: KitchenCabinetKind::Tall,
            base_price: 240.0,
            default_width_mm: 600.0,
            allowed_widths_mm: vec![600.0],
            has_door: true,
            has_drawer: false,
        },
    );
    catalog.add(
        "colonne-rangement",
        KitchenCabinetEntry {
            label: "Colonne de rangement".to_string(),
            kind: KitchenCabinetKind::Tall,
            base_price: 220.0,
            default_width_mm: 600.0,
            allowed_widths_mm: vec![450.0, 600.0],
            has_door: true,
            has_drawer: false,
        },
    );

    catalog
}
