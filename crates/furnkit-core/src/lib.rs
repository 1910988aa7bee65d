//! # Furnkit Core
//!
//! Core types and utilities for the Furnkit configurator engine.
//! Provides the reference catalogs (materials, fittings, kitchen cabinets,
//! templates, dimensional envelopes), money rounding rules, and the shared
//! error types used by every other crate in the workspace.

pub mod catalog;
pub mod error;
pub mod money;
pub mod units;

pub use catalog::{
    BandingKey, CatalogSet, DimRange, EdgeBandingCatalog, Envelopes, FamilyEnvelope, FinishCatalog,
    FinishKey, HandleStyle, HardwareCatalog, KitchenCabinetEntry, KitchenCabinetKind,
    KitchenCatalog, MaterialCatalog, MaterialEntry, MaterialKey, ModuleCatalog, ModuleEntry,
    ModuleKind, TemplateCabinet, TemplateCatalog, TemplateEntry, TemplateKey,
};
pub use error::{CatalogError, ConfigError, Error, Result};
pub use money::{round2, TVA_RATE};
