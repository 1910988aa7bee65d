//! Scene builder for free-form furniture.
//!
//! Coordinate convention: x runs along the cabinet row, y is up, z is depth
//! (front faces +z). Each cabinet occupies `[position.x, position.x + width]`
//! in x, `[0, height]` in y and `[0, depth]` in z.

use furnkit_configurator::model::{Cabinet, FeetStyle, MeubleConfig};
use furnkit_core::catalog::{CatalogSet, ModuleKind};
use glam::Vec3;

use crate::arena::{part, Outline, PartKind, PartShape, PickTag, SceneArena};

/// Drawer fronts never exceed this height, in mm.
const DRAWER_MAX_HEIGHT_MM: f64 = 150.0;
/// Thickness of the back panel, thinner than the carcass panels.
const BACK_PANEL_MM: f32 = 10.0;
const FOOT_HEIGHT_MM: f32 = 80.0;
/// Extra spread applied to fronts and fittings in exploded view.
const EXPLODE_OFFSET_MM: f32 = 250.0;

pub(crate) fn build_meuble(arena: &mut SceneArena, config: &MeubleConfig, catalogs: &CatalogSet) {
    let color = catalogs.materials.color_or_default(&config.material);
    let facade_color = [color[0] * 0.92, color[1] * 0.92, color[2] * 0.92];

    for cabinet in &config.cabinets {
        build_carcass(arena, cabinet, color);
        build_fittings(arena, cabinet, config, facade_color);
        build_feet(arena, cabinet, color);
    }

    if config.show_dimensions {
        build_dimension_labels(arena, config);
    }
}

fn build_carcass(arena: &mut SceneArena, cabinet: &Cabinet, color: [f32; 3]) {
    let x0 = cabinet.position.x as f32;
    let w = cabinet.width_mm as f32;
    let h = cabinet.height_mm as f32;
    let d = cabinet.depth_mm as f32;
    let t = cabinet.thickness_mm as f32;

    // Two full-height sides.
    arena.push(part(
        PartKind::SidePanel,
        Vec3::new(x0 + t / 2.0, h / 2.0, d / 2.0),
        Vec3::new(t, h, d),
        color,
    ));
    arena.push(part(
        PartKind::SidePanel,
        Vec3::new(x0 + w - t / 2.0, h / 2.0, d / 2.0),
        Vec3::new(t, h, d),
        color,
    ));

    // Top and bottom between the sides.
    let interior = (w - 2.0 * t).max(0.0);
    arena.push(part(
        PartKind::TopPanel,
        Vec3::new(x0 + w / 2.0, h - t / 2.0, d / 2.0),
        Vec3::new(interior, t, d),
        color,
    ));
    arena.push(part(
        PartKind::BottomPanel,
        Vec3::new(x0 + w / 2.0, t / 2.0, d / 2.0),
        Vec3::new(interior, t, d),
        color,
    ));

    if cabinet.has_back {
        arena.push(part(
            PartKind::BackPanel,
            Vec3::new(x0 + w / 2.0, h / 2.0, BACK_PANEL_MM / 2.0),
            Vec3::new(w, h, BACK_PANEL_MM),
            color,
        ));
    }
}

fn build_fittings(
    arena: &mut SceneArena,
    cabinet: &Cabinet,
    config: &MeubleConfig,
    facade_color: [f32; 3],
) {
    let x0 = cabinet.position.x as f32;
    let w = cabinet.width_mm as f32;
    let h = cabinet.height_mm as f32;
    let d = cabinet.depth_mm as f32;
    let t = cabinet.thickness_mm as f32;
    let interior = (w - 2.0 * t).max(0.0);
    let explode = if config.exploded { EXPLODE_OFFSET_MM } else { 0.0 };

    // Shelves at their stored vertical offsets; pickable for the drag
    // protocol.
    for module in &cabinet.modules {
        if module.kind != ModuleKind::Etagere && module.kind != ModuleKind::Penderie {
            continue;
        }
        let thickness = (module.height_mm as f32).max(10.0);
        let mut shelf = part(
            PartKind::Shelf,
            Vec3::new(
                x0 + w / 2.0,
                module.position_mm as f32,
                d / 2.0 + explode * 0.4,
            ),
            Vec3::new(interior, thickness, (d - 20.0).max(10.0)),
            facade_color,
        );
        if module.kind == ModuleKind::Penderie {
            shelf.shape = PartShape::Cylinder;
            shelf.size = Vec3::new(interior, 25.0, 25.0);
        }
        shelf.pickable = Some(PickTag::Module {
            cabinet: cabinet.id,
            module: module.id,
        });
        arena.push(shelf);
    }

    // Drawer fronts stack from the bottom; the height rule keeps them
    // proportionate in short cabinets.
    let drawers = cabinet.drawer_count();
    let drawer_height =
        DRAWER_MAX_HEIGHT_MM.min(cabinet.height_mm / (drawers as f64 + 2.0)) as f32;
    for index in 0..drawers {
        arena.push(part(
            PartKind::Drawer,
            Vec3::new(
                x0 + w / 2.0,
                t + drawer_height * (index as f32 + 0.5),
                d - 9.0 + explode,
            ),
            Vec3::new(interior, drawer_height, 18.0),
            facade_color,
        ));
    }

    // Doors span from the drawer stack (or the bottom panel) to the top.
    let doors = cabinet.door_count();
    if doors > 0 {
        let stack_top = t + drawer_height * drawers as f32;
        let door_bottom = if drawers > 0 { stack_top } else { t };
        let door_height = (h - t - door_bottom).max(0.0);
        let leaf_width = interior / doors as f32;
        for index in 0..doors {
            let leaf_x = x0 + t + leaf_width * (index as f32 + 0.5);
            let mut door = part(
                PartKind::Door,
                Vec3::new(
                    leaf_x,
                    door_bottom + door_height / 2.0,
                    d - 9.0 + explode * 1.2,
                ),
                Vec3::new(leaf_width, door_height, 18.0),
                facade_color,
            );
            if cabinet.door_style.sliding {
                door.outline = Outline::Dashed;
            }
            arena.push(door);

            // Hinged leaves get a round handle near the opening edge.
            if !cabinet.door_style.sliding {
                let toward_edge = if index % 2 == 0 { 0.4 } else { -0.4 };
                let mut handle = part(
                    PartKind::Handle,
                    Vec3::new(
                        leaf_x + leaf_width * toward_edge,
                        door_bottom + door_height / 2.0,
                        d + 15.0 + explode * 1.2,
                    ),
                    Vec3::new(30.0, 30.0, 30.0),
                    [0.35, 0.35, 0.38],
                );
                handle.shape = PartShape::Cylinder;
                arena.push(handle);
            }
        }
    }
}

fn build_feet(arena: &mut SceneArena, cabinet: &Cabinet, color: [f32; 3]) {
    if cabinet.feet == FeetStyle::None {
        return;
    }
    let x0 = cabinet.position.x as f32;
    let w = cabinet.width_mm as f32;
    let d = cabinet.depth_mm as f32;

    // Two symmetric feet at 10% and 90% of the width.
    for fraction in [0.1f32, 0.9] {
        let size = match cabinet.feet {
            FeetStyle::Incline => Vec3::new(30.0, FOOT_HEIGHT_MM, 30.0),
            _ => Vec3::new(40.0, FOOT_HEIGHT_MM, 40.0),
        };
        let mut foot = part(
            PartKind::Foot,
            Vec3::new(x0 + w * fraction, -FOOT_HEIGHT_MM / 2.0, d / 2.0),
            size,
            color,
        );
        if cabinet.feet == FeetStyle::Rond {
            foot.shape = PartShape::Cylinder;
        }
        arena.push(foot);
    }
}

fn build_dimension_labels(arena: &mut SceneArena, config: &MeubleConfig) {
    let width: f64 = config.cabinets.iter().map(|c| c.width_mm).sum();
    let height = config
        .cabinets
        .iter()
        .map(|c| c.height_mm)
        .fold(0.0, f64::max);
    let depth = config
        .cabinets
        .iter()
        .map(|c| c.depth_mm)
        .fold(0.0, f64::max);

    // One marker per axis, placed just outside the model.
    for (position, size) in [
        (
            Vec3::new(width as f32 / 2.0, -120.0, 0.0),
            Vec3::new(width as f32, 1.0, 1.0),
        ),
        (
            Vec3::new(-120.0, height as f32 / 2.0, 0.0),
            Vec3::new(1.0, height as f32, 1.0),
        ),
        (
            Vec3::new(-120.0, 0.0, depth as f32 / 2.0),
            Vec3::new(1.0, 1.0, depth as f32),
        ),
    ] {
        arena.push(part(
            PartKind::DimensionLabel,
            position,
            size,
            [0.1, 0.1, 0.1],
        ));
    }
}
