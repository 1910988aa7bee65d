//! Free-form furniture: cabinets and their internal modules.

use furnkit_core::catalog::{FinishKey, HandleStyle, MaterialKey, ModuleKind, TemplateEntry, TemplateKey};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Margin kept between a module and the cabinet's top/bottom panels, in mm.
pub const PANEL_EPS_MM: f64 = 1.0;

/// A position in the scene's coordinate space, in mm.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Foot geometry under a cabinet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeetStyle {
    /// Cabinet sits on the floor
    #[default]
    None,
    /// Turned round feet
    Rond,
    /// Square section feet
    Carre,
    /// Angled/splayed feet
    Incline,
}

impl std::fmt::Display for FeetStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "Sans pieds"),
            Self::Rond => write!(f, "Pieds ronds"),
            Self::Carre => write!(f, "Pieds carrés"),
            Self::Incline => write!(f, "Pieds inclinés"),
        }
    }
}

/// How door leaves open. Applies to the cabinet's `Porte` modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DoorStyle {
    /// Sliding doors instead of hinged
    pub sliding: bool,
}

/// Hardware range selected for the whole configuration.
///
/// Carried into the quote payload; unit prices come from the hardware
/// catalog either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HardwareTier {
    #[default]
    Standard,
    Renforce,
}

/// An internal fitting of a cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: Uuid,
    pub kind: ModuleKind,
    /// Vertical offset from the cabinet bottom, in mm
    pub position_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Module {
    pub fn new(kind: ModuleKind, position_mm: f64, width_mm: f64, height_mm: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            position_mm,
            width_mm,
            height_mm,
        }
    }
}

/// A rectangular furniture carcass hosting modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cabinet {
    pub id: Uuid,
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    /// Panel thickness; never exceeds half the smallest dimension
    pub thickness_mm: f64,
    /// Placement in the scene; `x` is maintained as the running sum of
    /// preceding cabinet widths
    pub position: Position3,
    pub modules: Vec<Module>,
    pub door_style: DoorStyle,
    pub feet: FeetStyle,
    pub has_back: bool,
}

impl Cabinet {
    /// Creates a cabinet with default 18 mm panels and no modules.
    pub fn new(width_mm: f64, height_mm: f64, depth_mm: f64) -> Self {
        let mut cabinet = Self {
            id: Uuid::new_v4(),
            width_mm,
            height_mm,
            depth_mm,
            thickness_mm: 18.0,
            position: Position3::default(),
            modules: Vec::new(),
            door_style: DoorStyle::default(),
            feet: FeetStyle::default(),
            has_back: true,
        };
        cabinet.thickness_mm = cabinet.thickness_mm.min(cabinet.max_thickness());
        cabinet
    }

    /// Largest admissible panel thickness: half the smallest dimension.
    pub fn max_thickness(&self) -> f64 {
        self.width_mm.min(self.height_mm).min(self.depth_mm) / 2.0
    }

    /// Usable vertical range for module positions, in mm from the bottom.
    pub fn usable_range(&self) -> (f64, f64) {
        (
            self.thickness_mm + PANEL_EPS_MM,
            self.height_mm - self.thickness_mm - PANEL_EPS_MM,
        )
    }

    /// Interior width between the side panels.
    pub fn interior_width(&self) -> f64 {
        (self.width_mm - 2.0 * self.thickness_mm).max(0.0)
    }

    /// Carcass surface in m²: two sides, top and bottom, and the front face.
    pub fn surface_m2(&self) -> f64 {
        let w = self.width_mm;
        let h = self.height_mm;
        let d = self.depth_mm;
        (2.0 * h * d + 2.0 * w * d + w * h) / 1_000_000.0
    }

    /// Perimeter of the front face in metres, used for edge banding.
    pub fn front_perimeter_m(&self) -> f64 {
        2.0 * (self.width_mm + self.height_mm) / 1000.0
    }

    fn count_kind(&self, kind: ModuleKind) -> usize {
        self.modules.iter().filter(|m| m.kind == kind).count()
    }

    pub fn shelf_count(&self) -> usize {
        self.count_kind(ModuleKind::Etagere)
    }

    pub fn drawer_count(&self) -> usize {
        self.count_kind(ModuleKind::Tiroir)
    }

    pub fn door_count(&self) -> usize {
        self.count_kind(ModuleKind::Porte)
    }

    /// Re-spaces shelf modules at even fractional heights `i/(N+1)`.
    ///
    /// Called on shelf add/remove; an explicit move commit overrides the
    /// stored position afterwards and is left alone.
    pub fn respace_shelves(&mut self) {
        let count = self.shelf_count();
        if count == 0 {
            return;
        }
        let height = self.height_mm;
        let mut index = 0usize;
        for module in &mut self.modules {
            if module.kind == ModuleKind::Etagere {
                index += 1;
                module.position_mm = height * index as f64 / (count as f64 + 1.0);
            }
        }
    }

    /// Clamps every module position back into the usable range.
    /// Run after any dimension or thickness change.
    pub fn clamp_module_positions(&mut self) {
        let (min, max) = self.usable_range();
        let interior = self.interior_width();
        for module in &mut self.modules {
            module.position_mm = module.position_mm.clamp(min, max.max(min));
            module.width_mm = module.width_mm.min(interior);
        }
    }
}

/// Recomputes cabinet x positions as the running sum of preceding widths.
/// Cabinets lay out left to right with no gaps.
pub fn relayout_cabinets(cabinets: &mut [Cabinet]) {
    let mut x = 0.0;
    for cabinet in cabinets {
        cabinet.position.x = x;
        x += cabinet.width_mm;
    }
}

/// Free-form furniture configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeubleConfig {
    pub name: String,
    pub template: Option<TemplateKey>,
    pub material: MaterialKey,
    /// At least one cabinet at all times
    pub cabinets: Vec<Cabinet>,
    pub global_handle: HandleStyle,
    pub hardware: HardwareTier,
    pub finish: FinishKey,
    pub show_dimensions: bool,
    pub exploded: bool,
}

impl MeubleConfig {
    /// Instantiates a configuration from a template entry.
    pub fn from_template(key: TemplateKey, entry: &TemplateEntry) -> Self {
        let mut cabinets: Vec<Cabinet> = entry
            .cabinets
            .iter()
            .map(|spec| {
                let mut cabinet = Cabinet::new(spec.width_mm, spec.height_mm, spec.depth_mm);
                let interior = cabinet.interior_width();
                for _ in 0..spec.shelves {
                    cabinet
                        .modules
                        .push(Module::new(ModuleKind::Etagere, 0.0, interior, 19.0));
                }
                for _ in 0..spec.drawers {
                    cabinet.modules.push(Module::new(
                        ModuleKind::Tiroir,
                        cabinet.usable_range().0,
                        interior,
                        150.0,
                    ));
                }
                for _ in 0..spec.doors {
                    cabinet
                        .modules
                        .push(Module::new(ModuleKind::Porte, 0.0, 0.0, 0.0));
                }
                cabinet.respace_shelves();
                cabinet
            })
            .collect();
        relayout_cabinets(&mut cabinets);

        Self {
            name: entry.label.clone(),
            template: Some(key),
            cabinets,
            ..Self::default()
        }
    }

    /// Total counts across cabinets: (shelves, drawers, doors).
    pub fn fitting_counts(&self) -> (usize, usize, usize) {
        let shelves = self.cabinets.iter().map(Cabinet::shelf_count).sum();
        let drawers = self.cabinets.iter().map(Cabinet::drawer_count).sum();
        let doors = self.cabinets.iter().map(Cabinet::door_count).sum();
        (shelves, drawers, doors)
    }
}

impl Default for MeubleConfig {
    /// One 800×2200×600 mm oak cabinet with three evenly spaced shelves,
    /// back panel on, no doors, no drawers, no feet.
    fn default() -> Self {
        let mut cabinet = Cabinet::new(800.0, 2200.0, 600.0);
        let interior = cabinet.interior_width();
        for _ in 0..3 {
            cabinet
                .modules
                .push(Module::new(ModuleKind::Etagere, 0.0, interior, 19.0));
        }
        cabinet.respace_shelves();

        Self {
            name: "Meuble sans titre".to_string(),
            template: None,
            material: MaterialKey::new("chene"),
            cabinets: vec![cabinet],
            global_handle: HandleStyle::None,
            hardware: HardwareTier::Standard,
            finish: FinishKey::new("brut"),
            show_dimensions: false,
            exploded: false,
        }
    }
}
