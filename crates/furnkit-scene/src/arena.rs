//! Generation-counted arena of scene parts.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle to a part; stale after any `clear` (the generation no longer
/// matches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartId {
    pub index: usize,
    pub generation: u64,
}

/// Geometric primitive of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartShape {
    Box,
    Cylinder,
}

/// Outline rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Outline {
    #[default]
    Solid,
    /// Sliding door leaves are drawn with a dashed outline
    Dashed,
}

/// What a part represents, for styling and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartKind {
    SidePanel,
    TopPanel,
    BottomPanel,
    BackPanel,
    Shelf,
    Drawer,
    Door,
    Handle,
    Foot,
    Board,
    EdgeBand,
    Wall,
    BaseCabinet,
    WallCabinet,
    TallCabinet,
    Countertop,
    Backsplash,
    DimensionLabel,
    /// Transient drag preview copy
    Ghost,
    /// Transient horizontal snap-plane indicator
    SnapIndicator,
}

/// Identifies the configuration entity behind a pickable part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickTag {
    Module { cabinet: Uuid, module: Uuid },
}

/// One drawable part. Positions and sizes are in millimetres; `position`
/// is the box center.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePart {
    pub id: PartId,
    pub kind: PartKind,
    pub shape: PartShape,
    pub position: Vec3,
    pub size: Vec3,
    pub color: [f32; 3],
    pub opacity: f32,
    pub outline: Outline,
    pub pickable: Option<PickTag>,
}

impl ScenePart {
    /// Axis-aligned bounds of the part.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let half = self.size * 0.5;
        (self.position - half, self.position + half)
    }

    /// Whether a point lies inside the part's bounds.
    pub fn contains(&self, point: Vec3) -> bool {
        let (min, max) = self.bounds();
        point.cmpge(min).all() && point.cmple(max).all()
    }
}

/// Statistics about the current scene contents.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStats {
    pub part_count: usize,
    pub generation: u64,
    pub bounds: Option<(Vec3, Vec3)>,
}

/// Owns every live part. `clear` bumps the generation so the ids handed out
/// before a rebuild can never address the parts allocated after it; dropping
/// the arena (or clearing it) is the single release point for the geometry
/// it owns.
#[derive(Debug, Clone, Default)]
pub struct SceneArena {
    parts: Vec<ScenePart>,
    generation: u64,
}

impl SceneArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every part and starts a new generation.
    pub fn clear(&mut self) {
        self.parts.clear();
        self.generation += 1;
    }

    /// Current generation; incremented on every clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Allocates a part, assigning its id in the current generation.
    pub fn push(&mut self, mut part: ScenePart) -> PartId {
        let id = PartId {
            index: self.parts.len(),
            generation: self.generation,
        };
        part.id = id;
        self.parts.push(part);
        id
    }

    /// Resolves a handle; returns `None` for stale generations.
    pub fn get(&self, id: PartId) -> Option<&ScenePart> {
        if id.generation != self.generation {
            return None;
        }
        self.parts.get(id.index)
    }

    /// Mutable handle resolution with the same staleness rule.
    pub fn get_mut(&mut self, id: PartId) -> Option<&mut ScenePart> {
        if id.generation != self.generation {
            return None;
        }
        self.parts.get_mut(id.index)
    }

    pub fn parts(&self) -> &[ScenePart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parts of a given kind, in allocation order.
    pub fn by_kind(&self, kind: PartKind) -> Vec<&ScenePart> {
        self.parts.iter().filter(|p| p.kind == kind).collect()
    }

    /// Union bounds over all parts.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        if self.parts.is_empty() {
            return None;
        }
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for part in &self.parts {
            let (part_min, part_max) = part.bounds();
            min = min.min(part_min);
            max = max.max(part_max);
        }
        Some((min, max))
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            part_count: self.parts.len(),
            generation: self.generation,
            bounds: self.bounds(),
        }
    }
}

/// Convenience constructor used by the builders.
pub(crate) fn part(kind: PartKind, position: Vec3, size: Vec3, color: [f32; 3]) -> ScenePart {
    ScenePart {
        id: PartId {
            index: 0,
            generation: 0,
        },
        kind,
        shape: PartShape::Box,
        position,
        size,
        color,
        opacity: 1.0,
        outline: Outline::Solid,
        pickable: None,
    }
}
