//! Cut-to-size boards with per-side edge banding.

use furnkit_core::catalog::{BandingKey, FinishKey, MaterialKey};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four edges of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BoardSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl BoardSide {
    pub const ALL: [BoardSide; 4] = [
        BoardSide::Top,
        BoardSide::Bottom,
        BoardSide::Left,
        BoardSide::Right,
    ];
}

/// Edge banding selection per side; `None` leaves the edge raw.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeBanding {
    pub top: Option<BandingKey>,
    pub bottom: Option<BandingKey>,
    pub left: Option<BandingKey>,
    pub right: Option<BandingKey>,
}

impl EdgeBanding {
    /// All four sides banded with the same key.
    pub fn all(key: BandingKey) -> Self {
        Self {
            top: Some(key.clone()),
            bottom: Some(key.clone()),
            left: Some(key.clone()),
            right: Some(key),
        }
    }

    pub fn get(&self, side: BoardSide) -> Option<&BandingKey> {
        match side {
            BoardSide::Top => self.top.as_ref(),
            BoardSide::Bottom => self.bottom.as_ref(),
            BoardSide::Left => self.left.as_ref(),
            BoardSide::Right => self.right.as_ref(),
        }
    }

    pub fn set(&mut self, side: BoardSide, key: Option<BandingKey>) {
        match side {
            BoardSide::Top => self.top = key,
            BoardSide::Bottom => self.bottom = key,
            BoardSide::Left => self.left = key,
            BoardSide::Right => self.right = key,
        }
    }

    /// The banded sides with their banding keys.
    pub fn banded_sides(&self) -> Vec<(BoardSide, &BandingKey)> {
        BoardSide::ALL
            .iter()
            .filter_map(|side| self.get(*side).map(|key| (*side, key)))
            .collect()
    }
}

/// An independent cut-to-size rectangular panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub length_mm: f64,
    pub width_mm: f64,
    /// Constrained to the catalog thickness set
    pub thickness_mm: f64,
    /// At least 1
    pub quantity: u32,
    pub edge_banding: EdgeBanding,
}

impl Board {
    pub fn new(length_mm: f64, width_mm: f64, thickness_mm: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            length_mm,
            width_mm,
            thickness_mm,
            quantity: 1,
            edge_banding: EdgeBanding::default(),
        }
    }

    /// Face surface in m².
    pub fn surface_m2(&self) -> f64 {
        self.length_mm * self.width_mm / 1_000_000.0
    }

    /// Length of one edge in mm. Top/bottom run the board length,
    /// left/right run the width.
    pub fn side_length_mm(&self, side: BoardSide) -> f64 {
        match side {
            BoardSide::Top | BoardSide::Bottom => self.length_mm,
            BoardSide::Left | BoardSide::Right => self.width_mm,
        }
    }
}

/// Cut-to-size board configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlancheConfig {
    pub name: String,
    pub material: MaterialKey,
    /// At least one board at all times
    pub boards: Vec<Board>,
    pub finish: FinishKey,
}

impl Default for PlancheConfig {
    fn default() -> Self {
        Self {
            name: "Découpe sans titre".to_string(),
            material: MaterialKey::new("chene"),
            boards: vec![Board::new(800.0, 400.0, 18.0)],
            finish: FinishKey::new("brut"),
        }
    }
}
