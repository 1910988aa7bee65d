//! Configuration model: the tagged union over product families.

use serde::{Deserialize, Serialize};

mod cuisine;
mod meuble;
mod planche;
mod quick;

pub use cuisine::{walls_for_layout, CountertopSpec, CuisineConfig, KitchenLayout, KitchenPlacement, Wall};
pub use meuble::{
    relayout_cabinets, Cabinet, DoorStyle, FeetStyle, HardwareTier, MeubleConfig, Module,
    Position3, PANEL_EPS_MM,
};
pub use planche::{Board, BoardSide, EdgeBanding, PlancheConfig};
pub use quick::{QuickCategory, QuickDesign, QuickShape};

/// The product families the configurator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductFamily {
    /// Free-form furniture (shelving units, wardrobes, sideboards)
    Meuble,
    /// Cut-to-size boards with optional edge banding
    Planche,
    /// Modular kitchens
    Cuisine,
}

impl std::fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Meuble => write!(f, "Meuble sur mesure"),
            Self::Planche => write!(f, "Découpe de panneaux"),
            Self::Cuisine => write!(f, "Cuisine modulaire"),
        }
    }
}

/// A complete product configuration, discriminated by family.
///
/// Every consumer (reducer, pricing engine, scene builder) dispatches on the
/// variant exhaustively; family-mismatched operations are documented no-ops,
/// never panics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "product", rename_all = "lowercase")]
pub enum ProductConfig {
    Meuble(MeubleConfig),
    Planche(PlancheConfig),
    Cuisine(CuisineConfig),
}

impl ProductConfig {
    /// The family discriminant.
    pub fn family(&self) -> ProductFamily {
        match self {
            Self::Meuble(_) => ProductFamily::Meuble,
            Self::Planche(_) => ProductFamily::Planche,
            Self::Cuisine(_) => ProductFamily::Cuisine,
        }
    }

    /// The family's default configuration.
    pub fn default_for(family: ProductFamily) -> Self {
        match family {
            ProductFamily::Meuble => Self::Meuble(MeubleConfig::default()),
            ProductFamily::Planche => Self::Planche(PlancheConfig::default()),
            ProductFamily::Cuisine => Self::Cuisine(CuisineConfig::default()),
        }
    }

    /// The user-given project name.
    pub fn name(&self) -> &str {
        match self {
            Self::Meuble(c) => &c.name,
            Self::Planche(c) => &c.name,
            Self::Cuisine(c) => &c.name,
        }
    }

    /// Sets the user-given project name.
    pub fn set_name(&mut self, name: String) {
        match self {
            Self::Meuble(c) => c.name = name,
            Self::Planche(c) => c.name = name,
            Self::Cuisine(c) => c.name = name,
        }
    }

    /// A human-readable dimensions summary for quotes and listings.
    pub fn display_dimensions(&self) -> String {
        match self {
            Self::Meuble(c) => {
                let width: f64 = c.cabinets.iter().map(|cab| cab.width_mm).sum();
                let height = c
                    .cabinets
                    .iter()
                    .map(|cab| cab.height_mm)
                    .fold(0.0, f64::max);
                let depth = c
                    .cabinets
                    .iter()
                    .map(|cab| cab.depth_mm)
                    .fold(0.0, f64::max);
                format!("L{width:.0} × H{height:.0} × P{depth:.0} mm")
            }
            Self::Planche(c) => match c.boards.first() {
                Some(board) if c.boards.len() == 1 => format!(
                    "{:.0} × {:.0} × {:.0} mm (×{})",
                    board.length_mm, board.width_mm, board.thickness_mm, board.quantity
                ),
                Some(board) => format!(
                    "{:.0} × {:.0} × {:.0} mm et {} autres formats",
                    board.length_mm,
                    board.width_mm,
                    board.thickness_mm,
                    c.boards.len() - 1
                ),
                None => "aucun panneau".to_string(),
            },
            Self::Cuisine(c) => {
                let run: f64 = c.walls.iter().map(|w| w.length_mm).sum();
                format!("Implantation {} — {run:.0} mm linéaire", c.layout)
            }
        }
    }
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self::Meuble(MeubleConfig::default())
    }
}
