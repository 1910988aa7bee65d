//! Scene builder for modular kitchens.
//!
//! Walls lie in the xz-plane: a wall starts at `(start_x, 0, start_y)` and
//! runs along its angle; cabinets sit on the room side of the wall at their
//! cumulative `position_on_wall`. One countertop slab is emitted per wall
//! that carries base cabinets.

use furnkit_configurator::model::{CuisineConfig, Wall};
use furnkit_core::catalog::{CatalogSet, KitchenCabinetKind};
use glam::Vec3;

use crate::arena::{part, PartKind, SceneArena};

const WALL_HEIGHT_MM: f32 = 2500.0;
const WALL_THICKNESS_MM: f32 = 100.0;
const BASE_HEIGHT_MM: f32 = 850.0;
const BASE_DEPTH_MM: f32 = 580.0;
const WALL_CABINET_ELEVATION_MM: f32 = 1400.0;
const WALL_CABINET_HEIGHT_MM: f32 = 700.0;
const WALL_CABINET_DEPTH_MM: f32 = 350.0;
const TALL_HEIGHT_MM: f32 = 2200.0;
const TALL_DEPTH_MM: f32 = 600.0;
const BACKSPLASH_THICKNESS_MM: f32 = 20.0;

const WALL_COLOR: [f32; 3] = [0.88, 0.87, 0.84];

/// Direction a wall runs along, and the normal pointing into the room.
fn wall_axes(wall: &Wall) -> (Vec3, Vec3) {
    let angle = (wall.angle_deg as f32).to_radians();
    let direction = Vec3::new(angle.cos(), 0.0, angle.sin());
    let normal = Vec3::new(-angle.sin(), 0.0, angle.cos());
    (direction, normal)
}

fn wall_start(wall: &Wall) -> Vec3 {
    Vec3::new(wall.start_x_mm as f32, 0.0, wall.start_y_mm as f32)
}

/// Axis-aligned slab covering the wall segment.
fn wall_slab(wall: &Wall) -> (Vec3, Vec3) {
    let (direction, normal) = wall_axes(wall);
    let start = wall_start(wall);
    let center = start + direction * (wall.length_mm as f32 / 2.0)
        - normal * (WALL_THICKNESS_MM / 2.0)
        + Vec3::Y * (WALL_HEIGHT_MM / 2.0);
    let footprint = direction.abs() * wall.length_mm as f32;
    let size = Vec3::new(
        footprint.x.max(WALL_THICKNESS_MM),
        WALL_HEIGHT_MM,
        footprint.z.max(WALL_THICKNESS_MM),
    );
    (center, size)
}

/// Box for a cabinet along a wall at a given run offset.
fn cabinet_box(
    wall: &Wall,
    offset_mm: f64,
    width_mm: f64,
    elevation_mm: f32,
    height_mm: f32,
    depth_mm: f32,
) -> (Vec3, Vec3) {
    let (direction, normal) = wall_axes(wall);
    let start = wall_start(wall);
    let center = start
        + direction * ((offset_mm + width_mm / 2.0) as f32)
        + normal * (depth_mm / 2.0)
        + Vec3::Y * (elevation_mm + height_mm / 2.0);
    let along = direction.abs() * width_mm as f32;
    let across = normal.abs() * depth_mm;
    let size = Vec3::new(
        (along.x + across.x).max(1.0),
        height_mm,
        (along.z + across.z).max(1.0),
    );
    (center, size)
}

pub(crate) fn build_cuisine(arena: &mut SceneArena, config: &CuisineConfig, catalogs: &CatalogSet) {
    let carcass_color = catalogs.materials.color_or_default(&config.carcass_material);
    let facade_color = catalogs.materials.color_or_default(&config.facade_material);
    let countertop_color = catalogs
        .materials
        .color_or_default(&config.countertop.material);

    for wall in &config.walls {
        let (center, size) = wall_slab(wall);
        arena.push(part(PartKind::Wall, center, size, WALL_COLOR));
    }

    for wall in &config.walls {
        for placement in config
            .placements(KitchenCabinetKind::Base)
            .iter()
            .filter(|p| p.wall_id == wall.id)
        {
            let (center, size) = cabinet_box(
                wall,
                placement.position_on_wall_mm,
                placement.width_mm,
                0.0,
                BASE_HEIGHT_MM,
                BASE_DEPTH_MM,
            );
            arena.push(part(PartKind::BaseCabinet, center, size, facade_color));
        }

        for placement in config
            .placements(KitchenCabinetKind::Wall)
            .iter()
            .filter(|p| p.wall_id == wall.id)
        {
            let (center, size) = cabinet_box(
                wall,
                placement.position_on_wall_mm,
                placement.width_mm,
                WALL_CABINET_ELEVATION_MM,
                WALL_CABINET_HEIGHT_MM,
                WALL_CABINET_DEPTH_MM,
            );
            arena.push(part(PartKind::WallCabinet, center, size, carcass_color));
        }

        for placement in config
            .placements(KitchenCabinetKind::Tall)
            .iter()
            .filter(|p| p.wall_id == wall.id)
        {
            let (center, size) = cabinet_box(
                wall,
                placement.position_on_wall_mm,
                placement.width_mm,
                0.0,
                TALL_HEIGHT_MM,
                TALL_DEPTH_MM,
            );
            arena.push(part(PartKind::TallCabinet, center, size, facade_color));
        }

        build_countertop(arena, config, wall, countertop_color);
    }
}

fn build_countertop(
    arena: &mut SceneArena,
    config: &CuisineConfig,
    wall: &Wall,
    color: [f32; 3],
) {
    let run_mm = config.base_run_on_wall(wall.id);
    if run_mm <= 0.0 {
        return;
    }

    let depth_mm = (config.countertop.depth_m() * 1000.0) as f32;
    let thickness_mm = config.countertop.thickness_mm as f32;
    let (direction, normal) = wall_axes(wall);
    let start = wall_start(wall);

    let center = start
        + direction * (run_mm as f32 / 2.0)
        + normal * (depth_mm / 2.0)
        + Vec3::Y * (BASE_HEIGHT_MM + thickness_mm / 2.0);
    let along = direction.abs() * run_mm as f32;
    let across = normal.abs() * depth_mm;
    arena.push(part(
        PartKind::Countertop,
        center,
        Vec3::new(
            (along.x + across.x).max(1.0),
            thickness_mm,
            (along.z + across.z).max(1.0),
        ),
        color,
    ));

    let backsplash_mm = config.countertop.backsplash_height_mm as f32;
    if backsplash_mm > 0.0 {
        let center = start
            + direction * (run_mm as f32 / 2.0)
            + normal * (BACKSPLASH_THICKNESS_MM / 2.0)
            + Vec3::Y * (BASE_HEIGHT_MM + thickness_mm + backsplash_mm / 2.0);
        let across = normal.abs() * BACKSPLASH_THICKNESS_MM;
        arena.push(part(
            PartKind::Backsplash,
            center,
            Vec3::new(
                (along.x + across.x).max(1.0),
                backsplash_mm,
                (along.z + across.z).max(1.0),
            ),
            color,
        ));
    }
}
