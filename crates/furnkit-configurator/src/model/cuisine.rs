//! Modular kitchens: layout presets, walls, cabinet placements, countertop.

use furnkit_core::catalog::{FinishKey, HandleStyle, KitchenCabinetKind, MaterialKey};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::meuble::HardwareTier;

/// Kitchen layout presets. A preset fully determines the wall set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum KitchenLayout {
    /// Single run
    I,
    /// Two runs at a right angle
    L,
    /// Three runs
    U,
    /// Main run plus a free-standing island
    Island,
}

impl std::fmt::Display for KitchenLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::I => write!(f, "I"),
            Self::L => write!(f, "L"),
            Self::U => write!(f, "U"),
            Self::Island => write!(f, "îlot"),
        }
    }
}

/// A wall run cabinets are placed along.
///
/// Walls are derived from the layout preset, never edited directly; the
/// polyline is reconstructed from `(start, angle, length)` when needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: Uuid,
    pub length_mm: f64,
    pub angle_deg: f64,
    pub start_x_mm: f64,
    pub start_y_mm: f64,
}

impl Wall {
    fn new(length_mm: f64, angle_deg: f64, start_x_mm: f64, start_y_mm: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            length_mm,
            angle_deg,
            start_x_mm,
            start_y_mm,
        }
    }
}

/// The wall set a layout preset expands to.
pub fn walls_for_layout(layout: KitchenLayout) -> Vec<Wall> {
    match layout {
        KitchenLayout::I => vec![Wall::new(3000.0, 0.0, 0.0, 0.0)],
        KitchenLayout::L => vec![
            Wall::new(3000.0, 0.0, 0.0, 0.0),
            Wall::new(2400.0, 90.0, 3000.0, 0.0),
        ],
        KitchenLayout::U => vec![
            Wall::new(2400.0, 90.0, 0.0, 0.0),
            Wall::new(3000.0, 0.0, 0.0, 0.0),
            Wall::new(2400.0, 90.0, 3000.0, 0.0),
        ],
        KitchenLayout::Island => vec![
            Wall::new(3000.0, 0.0, 0.0, 0.0),
            Wall::new(1800.0, 0.0, 600.0, 1500.0),
        ],
    }
}

/// A kitchen cabinet placed along a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenPlacement {
    pub id: Uuid,
    /// Key into the kitchen cabinet catalog
    pub catalog_key: String,
    pub width_mm: f64,
    pub wall_id: Uuid,
    /// Running sum of earlier placements on the same wall (append-only)
    pub position_on_wall_mm: f64,
}

/// Countertop specification for the whole kitchen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountertopSpec {
    pub material: MaterialKey,
    pub thickness_mm: f64,
    /// Front overhang beyond the 580 mm carcass; 0 means the standard
    /// 650 mm countertop depth
    pub overhang_mm: f64,
    /// 0 disables the backsplash
    pub backsplash_height_mm: f64,
}

impl CountertopSpec {
    /// Effective countertop depth in metres.
    pub fn depth_m(&self) -> f64 {
        if self.overhang_mm > 0.0 {
            (580.0 + self.overhang_mm) / 1000.0
        } else {
            0.65
        }
    }
}

impl Default for CountertopSpec {
    fn default() -> Self {
        Self {
            material: MaterialKey::new("plan-stratifie"),
            thickness_mm: 38.0,
            overhang_mm: 0.0,
            backsplash_height_mm: 0.0,
        }
    }
}

/// Modular kitchen configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuisineConfig {
    pub name: String,
    pub layout: KitchenLayout,
    pub walls: Vec<Wall>,
    pub base_cabinets: Vec<KitchenPlacement>,
    pub wall_cabinets: Vec<KitchenPlacement>,
    pub tall_cabinets: Vec<KitchenPlacement>,
    pub countertop: CountertopSpec,
    pub facade_material: MaterialKey,
    pub carcass_material: MaterialKey,
    pub global_handle: HandleStyle,
    pub hardware: HardwareTier,
    pub finish: FinishKey,
}

impl CuisineConfig {
    /// Applies a layout preset: regenerates the wall set and clears every
    /// cabinet placement (placements reference walls that no longer exist).
    pub fn apply_layout(&mut self, layout: KitchenLayout) {
        self.layout = layout;
        self.walls = walls_for_layout(layout);
        self.base_cabinets.clear();
        self.wall_cabinets.clear();
        self.tall_cabinets.clear();
    }

    /// The placement list for a mounting kind.
    pub fn placements_mut(&mut self, kind: KitchenCabinetKind) -> &mut Vec<KitchenPlacement> {
        match kind {
            KitchenCabinetKind::Base => &mut self.base_cabinets,
            KitchenCabinetKind::Wall => &mut self.wall_cabinets,
            KitchenCabinetKind::Tall => &mut self.tall_cabinets,
        }
    }

    pub fn placements(&self, kind: KitchenCabinetKind) -> &[KitchenPlacement] {
        match kind {
            KitchenCabinetKind::Base => &self.base_cabinets,
            KitchenCabinetKind::Wall => &self.wall_cabinets,
            KitchenCabinetKind::Tall => &self.tall_cabinets,
        }
    }

    /// Every placement across the three lists.
    pub fn all_placements(&self) -> impl Iterator<Item = &KitchenPlacement> {
        self.base_cabinets
            .iter()
            .chain(self.wall_cabinets.iter())
            .chain(self.tall_cabinets.iter())
    }

    /// Recomputes `position_on_wall` as the per-wall running sum, for each
    /// mounting kind independently.
    pub fn relayout_placements(&mut self) {
        let wall_ids: Vec<Uuid> = self.walls.iter().map(|w| w.id).collect();
        for kind in [
            KitchenCabinetKind::Base,
            KitchenCabinetKind::Wall,
            KitchenCabinetKind::Tall,
        ] {
            let list = self.placements_mut(kind);
            for wall_id in &wall_ids {
                let mut offset = 0.0;
                for placement in list.iter_mut().filter(|p| p.wall_id == *wall_id) {
                    placement.position_on_wall_mm = offset;
                    offset += placement.width_mm;
                }
            }
        }
    }

    /// Total width of base cabinets on one wall, in mm.
    pub fn base_run_on_wall(&self, wall_id: Uuid) -> f64 {
        self.base_cabinets
            .iter()
            .filter(|p| p.wall_id == wall_id)
            .map(|p| p.width_mm)
            .sum()
    }
}

impl Default for CuisineConfig {
    /// L-shaped two-wall kitchen with no cabinets placed yet.
    fn default() -> Self {
        Self {
            name: "Cuisine sans titre".to_string(),
            layout: KitchenLayout::L,
            walls: walls_for_layout(KitchenLayout::L),
            base_cabinets: Vec::new(),
            wall_cabinets: Vec::new(),
            tall_cabinets: Vec::new(),
            countertop: CountertopSpec::default(),
            facade_material: MaterialKey::new("melamine"),
            carcass_material: MaterialKey::new("melamine"),
            global_handle: HandleStyle::Poignee,
            hardware: HardwareTier::Standard,
            finish: FinishKey::new("brut"),
        }
    }
}
