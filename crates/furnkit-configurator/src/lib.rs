//! # Furnkit Configurator
//!
//! The configuration model and wizard state machine.
//!
//! A [`model::ProductConfig`] is a tagged union over the three product
//! families (free-form furniture, cut-to-size boards, modular kitchens).
//! The wizard drives it through a pure reducer over a closed action set:
//! `(WizardState, WizardAction) -> WizardState`, with step gating, family
//! guards, and envelope clamping applied before any value is accepted.

pub mod model;
pub mod wizard;

pub use model::{
    Board, BoardSide, Cabinet, CountertopSpec, CuisineConfig, DoorStyle, EdgeBanding, FeetStyle,
    HardwareTier, KitchenLayout, KitchenPlacement, MeubleConfig, Module, PlancheConfig, Position3,
    ProductConfig, ProductFamily, QuickCategory, QuickDesign, QuickShape, Wall,
};
pub use wizard::{reduce, step_sequence, WizardAction, WizardState, WizardStep};
