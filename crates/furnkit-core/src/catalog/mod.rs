//! Reference catalogs for the configurator.
//!
//! This module provides:
//! - Material, edge banding, and finish price tables
//! - Module and hardware catalogs for free-form furniture
//! - Kitchen cabinet catalogs
//! - Furniture templates
//! - Dimensional envelopes per product family
//!
//! Catalogs are immutable reference data threaded into the pricing and scene
//! builders as an explicit parameter. They are never mutated at runtime by
//! the engine; admin overrides are merged in once at startup by the settings
//! crate. Lookup misses degrade to zero-cost/neutral defaults, never errors.

mod envelopes;
mod fittings;
mod kitchen;
mod materials;
mod templates;

pub use envelopes::{DimRange, Envelopes, FamilyEnvelope, BOARD_THICKNESSES_MM};
pub use fittings::{HandleStyle, HardwareCatalog, ModuleCatalog, ModuleEntry, ModuleKind};
pub use kitchen::{KitchenCabinetEntry, KitchenCabinetKind, KitchenCatalog};
pub use materials::{
    BandingKey, EdgeBandingCatalog, FinishCatalog, FinishKey, MaterialCatalog, MaterialEntry,
    MaterialKey,
};
pub use templates::{TemplateCabinet, TemplateCatalog, TemplateEntry, TemplateKey};

/// The full set of reference catalogs consumed by the engine.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    pub materials: MaterialCatalog,
    pub modules: ModuleCatalog,
    pub hardware: HardwareCatalog,
    pub kitchen: KitchenCatalog,
    pub templates: TemplateCatalog,
    pub banding: EdgeBandingCatalog,
    pub finishes: FinishCatalog,
    pub envelopes: Envelopes,
}

impl CatalogSet {
    /// Builds the built-in catalog set used when no admin override is present.
    pub fn standard() -> Self {
        Self {
            materials: materials::standard_materials(),
            modules: fittings::standard_modules(),
            hardware: HardwareCatalog::default(),
            kitchen: kitchen::standard_kitchen(),
            templates: templates::standard_templates(),
            banding: materials::standard_banding(),
            finishes: materials::standard_finishes(),
            envelopes: Envelopes::default(),
        }
    }
}

impl Default for CatalogSet {
    fn default() -> Self {
        Self::standard()
    }
}
