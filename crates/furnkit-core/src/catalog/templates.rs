//! Furniture templates.
//!
//! Templates are plain data: cabinet dimensions and fitting counts that the
//! configurator instantiates into a full cabinet list. They stay free of
//! configuration types so the catalog crate remains a leaf.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Template identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct TemplateKey(pub String);

impl TemplateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cabinet of a template, as raw dimensions and fitting counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateCabinet {
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    pub shelves: u32,
    pub drawers: u32,
    pub doors: u32,
}

/// A named furniture preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Display label
    pub label: String,
    /// Cabinets laid out left to right
    pub cabinets: Vec<TemplateCabinet>,
}

/// Template catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateCatalog {
    entries: HashMap<TemplateKey, TemplateEntry>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: TemplateKey, entry: TemplateEntry) {
        self.entries.insert(key, entry);
    }

    pub fn get(&self, key: &TemplateKey) -> Option<&TemplateEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Initialize the standard template catalog.
pub fn standard_templates() -> TemplateCatalog {
    let mut catalog = TemplateCatalog::new();

    catalog.add(
        TemplateKey::new("bibliotheque"),
        TemplateEntry {
            label: "Bibliothèque".to_string(),
            cabinets: vec![TemplateCabinet {
                width_mm: 900.0,
                height_mm: 2200.0,
                depth_mm: 350.0,
                shelves: 5,
                drawers: 0,
                doors: 0,
            }],
        },
    );
    catalog.add(
        TemplateKey::new("dressing"),
        TemplateEntry {
            label: "Dressing".to_string(),
            cabinets: vec![
                TemplateCabinet {
                    width_mm: 1000.0,
                    height_mm: 2400.0,
                    depth_mm: 600.0,
                    shelves: 1,
                    drawers: 0,
                    doors: 2,
                },
                TemplateCabinet {
                    width_mm: 600.0,
                    height_mm: 2400.0,
                    depth_mm: 600.0,
                    shelves: 4,
                    drawers: 2,
                    doors: 0,
                },
            ],
        },
    );
    catalog.add(
        TemplateKey::new("buffet"),
        TemplateEntry {
            label: "Buffet".to_string(),
            cabinets: vec![
                TemplateCabinet {
                    width_mm: 800.0,
                    height_mm: 900.0,
                    depth_mm: 450.0,
                    shelves: 1,
                    drawers: 0,
                    doors: 2,
                },
                TemplateCabinet {
                    width_mm: 800.0,
                    height_mm: 900.0,
                    depth_mm: 450.0,
                    shelves: 0,
                    drawers: 3,
                    doors: 0,
                },
            ],
        },
    );
    catalog.add(
        TemplateKey::new("rangement"),
        TemplateEntry {
            label: "Meuble de rangement".to_string(),
            cabinets: vec![TemplateCabinet {
                width_mm: 800.0,
                height_mm: 2200.0,
                depth_mm: 600.0,
                shelves: 3,
                drawers: 0,
                doors: 0,
            }],
        },
    );

    catalog
}
