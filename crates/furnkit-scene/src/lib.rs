//! # Furnkit Scene
//!
//! Procedural scene construction. Each product family has a builder that
//! reconstructs the full part list from the configuration on every change —
//! the previous parts are discarded wholesale (no incremental diffing),
//! trading rebuild cost for correctness and the absence of stale geometry.
//!
//! Parts live in a generation-counted [`SceneArena`]; clearing the arena
//! invalidates every outstanding handle, so a part created before a rebuild
//! can never be confused with one created after.

mod arena;
mod cuisine;
pub mod flat;
mod meuble;
mod planche;

pub use arena::{
    Outline, PartId, PartKind, PartShape, PickTag, SceneArena, ScenePart, SceneStats,
};

use furnkit_configurator::model::ProductConfig;
use furnkit_core::catalog::CatalogSet;
use glam::Vec3;

/// Rebuilds the arena from scratch for the given configuration.
pub fn rebuild(arena: &mut SceneArena, config: &ProductConfig, catalogs: &CatalogSet) {
    arena.clear();
    match config {
        ProductConfig::Meuble(c) => meuble::build_meuble(arena, c, catalogs),
        ProductConfig::Planche(c) => planche::build_planche(arena, c, catalogs),
        ProductConfig::Cuisine(c) => cuisine::build_cuisine(arena, c, catalogs),
    }
    tracing::debug!(
        parts = arena.len(),
        generation = arena.generation(),
        "Scene rebuilt"
    );
}

/// The camera framing for the current model: geometric center and the
/// bounding extent the viewport scales its distance from.
pub fn frame_scene(arena: &SceneArena) -> (Vec3, f32) {
    match arena.bounds() {
        Some((min, max)) => {
            let center = (min + max) * 0.5;
            let extent = (max - min).length().max(1.0);
            (center, extent)
        }
        None => (Vec3::ZERO, 1.0),
    }
}
