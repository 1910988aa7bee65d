//! The simplified single-cabinet configurator variant.
//!
//! A separate, flatter model for quick quotes: one piece, one shape, a 2D
//! silhouette preview instead of the full 3D scene. Unlike the wizard
//! families, its setters clamp directly (the variant has no reducer in
//! front of it).

use furnkit_core::catalog::{Envelopes, FinishKey, MaterialKey};
use serde::{Deserialize, Serialize};

/// Product category of a quick design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QuickCategory {
    /// Closed carcass piece
    Furniture,
    /// Worktop / countertop slab
    Worktop,
    /// Open shelving unit
    Shelving,
}

impl std::fmt::Display for QuickCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Furniture => write!(f, "Meuble"),
            Self::Worktop => write!(f, "Plan de travail"),
            Self::Shelving => write!(f, "Étagères"),
        }
    }
}

/// Worktop plan shape. Straight has no multiplier; L and U scale the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuickShape {
    #[default]
    Straight,
    L,
    U,
}

impl QuickShape {
    /// Surface multiplier relative to the straight shape.
    pub fn surface_factor(&self) -> f64 {
        match self {
            Self::Straight => 1.0,
            Self::L => 1.5,
            Self::U => 2.0,
        }
    }
}

/// A quick single-piece design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickDesign {
    pub category: QuickCategory,
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    pub shape: QuickShape,
    pub shelf_count: u32,
    pub material: MaterialKey,
    pub finish: FinishKey,
}

impl QuickDesign {
    pub fn new(category: QuickCategory) -> Self {
        let (width, height, depth) = match category {
            QuickCategory::Furniture => (800.0, 900.0, 450.0),
            QuickCategory::Worktop => (2000.0, 38.0, 650.0),
            QuickCategory::Shelving => (900.0, 1800.0, 300.0),
        };
        Self {
            category,
            width_mm: width,
            height_mm: height,
            depth_mm: depth,
            shape: QuickShape::Straight,
            shelf_count: if category == QuickCategory::Shelving { 4 } else { 0 },
            material: MaterialKey::new("chene"),
            finish: FinishKey::new("brut"),
        }
    }

    /// Sets the width, clamped to the quick envelope.
    pub fn set_width(&mut self, width_mm: f64, envelopes: &Envelopes) {
        self.width_mm = envelopes.quick.width.clamp(width_mm);
    }

    /// Sets the height, clamped to the quick envelope.
    pub fn set_height(&mut self, height_mm: f64, envelopes: &Envelopes) {
        self.height_mm = envelopes.quick.height.clamp(height_mm);
    }

    /// Sets the depth, clamped to the quick envelope.
    pub fn set_depth(&mut self, depth_mm: f64, envelopes: &Envelopes) {
        self.depth_mm = envelopes.quick.depth.clamp(depth_mm);
    }

    /// Priced surface in m², per category:
    /// - furniture: the carcass surface (sides, top/bottom, front);
    /// - worktop: plan surface times the shape factor;
    /// - shelving: back panel plus one surface per shelf.
    pub fn surface_m2(&self) -> f64 {
        let w = self.width_mm;
        let h = self.height_mm;
        let d = self.depth_mm;
        match self.category {
            QuickCategory::Furniture => (2.0 * h * d + 2.0 * w * d + w * h) / 1_000_000.0,
            QuickCategory::Worktop => (w * d / 1_000_000.0) * self.shape.surface_factor(),
            QuickCategory::Shelving => {
                let back = w * h / 1_000_000.0;
                let shelves = self.shelf_count as f64 * (w * d / 1_000_000.0);
                back + shelves
            }
        }
    }
}

impl Default for QuickDesign {
    fn default() -> Self {
        Self::new(QuickCategory::Furniture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worktop_shape_factors() {
        let mut design = QuickDesign::new(QuickCategory::Worktop);
        let straight = design.surface_m2();
        design.shape = QuickShape::L;
        assert!((design.surface_m2() - straight * 1.5).abs() < 1e-9);
        design.shape = QuickShape::U;
        assert!((design.surface_m2() - straight * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_shelving_layered_surface() {
        let design = QuickDesign::new(QuickCategory::Shelving);
        // back 0.9×1.8 + 4 shelves of 0.9×0.3
        let expected = 0.9 * 1.8 + 4.0 * (0.9 * 0.3);
        assert!((design.surface_m2() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_setters_clamp() {
        let envelopes = Envelopes::default();
        let mut design = QuickDesign::default();
        design.set_width(99999.0, &envelopes);
        assert_eq!(design.width_mm, envelopes.quick.width.max_mm);
        design.set_depth(1.0, &envelopes);
        assert_eq!(design.depth_mm, envelopes.quick.depth.min_mm);
    }
}
