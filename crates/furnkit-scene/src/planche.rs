//! Scene builder for cut-to-size boards.
//!
//! Only the first board of the list is rendered, as a representative sample
//! of the cut: the preview answers "what does this panel look like", not
//! "what does the whole cut list look like". Edge banding strips are drawn
//! on banded sides only.

use furnkit_configurator::model::{BoardSide, PlancheConfig};
use furnkit_core::catalog::CatalogSet;
use glam::Vec3;

use crate::arena::{part, PartKind, SceneArena};

const BAND_THICKNESS_MM: f32 = 2.0;
const BAND_COLOR: [f32; 3] = [0.89, 0.46, 0.2];

pub(crate) fn build_planche(arena: &mut SceneArena, config: &PlancheConfig, catalogs: &CatalogSet) {
    let Some(board) = config.boards.first() else {
        return;
    };
    if config.boards.len() > 1 {
        tracing::debug!(
            boards = config.boards.len(),
            "Previewing first board only"
        );
    }

    let color = catalogs.materials.color_or_default(&config.material);
    let length = board.length_mm as f32;
    let width = board.width_mm as f32;
    let thickness = board.thickness_mm as f32;

    // The board lies flat, centered on the origin: x along the length,
    // z along the width.
    arena.push(part(
        PartKind::Board,
        Vec3::ZERO,
        Vec3::new(length, thickness, width),
        color,
    ));

    for (side, _) in board.edge_banding.banded_sides() {
        let (position, size) = match side {
            BoardSide::Top => (
                Vec3::new(0.0, 0.0, width / 2.0 + BAND_THICKNESS_MM / 2.0),
                Vec3::new(length, thickness, BAND_THICKNESS_MM),
            ),
            BoardSide::Bottom => (
                Vec3::new(0.0, 0.0, -width / 2.0 - BAND_THICKNESS_MM / 2.0),
                Vec3::new(length, thickness, BAND_THICKNESS_MM),
            ),
            BoardSide::Left => (
                Vec3::new(-length / 2.0 - BAND_THICKNESS_MM / 2.0, 0.0, 0.0),
                Vec3::new(BAND_THICKNESS_MM, thickness, width),
            ),
            BoardSide::Right => (
                Vec3::new(length / 2.0 + BAND_THICKNESS_MM / 2.0, 0.0, 0.0),
                Vec3::new(BAND_THICKNESS_MM, thickness, width),
            ),
        };
        arena.push(part(PartKind::EdgeBand, position, size, BAND_COLOR));
    }
}
