//! Pointer-driven module repositioning.
//!
//! A local state machine: Idle → Dragging (pointer-down over a draggable
//! part) → Idle (pointer-up or pointer-leave). While dragging, a
//! semi-transparent ghost previews the snapped candidate position and a
//! horizontal indicator marks the snap plane; the ghost turns green when the
//! candidate is inside the cabinet's usable range and red otherwise. The
//! move is committed into the wizard only on release at a valid position;
//! the transient overlay parts are disposed unconditionally either way.

use furnkit_configurator::WizardAction;
use furnkit_scene::{Outline, PartId, PartKind, PartShape, SceneArena, ScenePart};
use glam::Vec3;
use tracing::debug;
use uuid::Uuid;

/// Screen-pixels-to-millimetres drag sensitivity.
pub const DRAG_SENSITIVITY_MM_PER_PX: f64 = 2.0;
/// Candidate positions snap to this grid.
pub const SNAP_GRID_MM: f64 = 50.0;
/// Clearance kept above the bottom panel.
pub const LOWER_MARGIN_MM: f64 = 50.0;
/// Clearance kept below the top panel.
pub const UPPER_MARGIN_MM: f64 = 100.0;

const GHOST_OPACITY: f32 = 0.45;
const INDICATOR_OPACITY: f32 = 0.3;
const VALID_COLOR: [f32; 3] = [0.22, 0.78, 0.35];
const INVALID_COLOR: [f32; 3] = [0.86, 0.22, 0.2];

/// Everything the controller needs to know about the grabbed module.
#[derive(Debug, Clone, Copy)]
pub struct DragTarget {
    pub cabinet: Uuid,
    pub module: Uuid,
    /// The scene part under the pointer at drag start
    pub part: PartId,
    /// Module vertical position when the drag began, in mm
    pub origin_mm: f64,
    pub cabinet_thickness_mm: f64,
    pub cabinet_height_mm: f64,
    /// Transform of the grabbed part, for spawning the ghost
    pub part_position: Vec3,
    pub part_size: Vec3,
}

/// Feedback for the frontend after each pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFeedback {
    /// Snapped candidate position, in mm from the cabinet bottom
    pub candidate_mm: f64,
    /// Whether releasing now would commit
    pub valid: bool,
}

#[derive(Debug)]
struct ActiveDrag {
    target: DragTarget,
    ghost: PartId,
    indicator: PartId,
    candidate_mm: f64,
    valid: bool,
    moved: bool,
}

/// The drag state machine. Owns a transient overlay arena whose parts exist
/// only for the duration of one drag; `end`/`cancel` clear it whether or not
/// the move commits, so nothing leaks across drags.
#[derive(Debug, Default)]
pub struct DragController {
    overlay: SceneArena,
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transient overlay parts (ghost, snap indicator) to draw on top of
    /// the scene.
    pub fn overlay(&self) -> &SceneArena {
        &self.overlay
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The part to draw highlighted while a drag is in progress.
    pub fn selected_part(&self) -> Option<PartId> {
        self.active.as_ref().map(|drag| drag.target.part)
    }

    /// Usable candidate range for the grabbed module.
    fn range(target: &DragTarget) -> (f64, f64) {
        (
            target.cabinet_thickness_mm + LOWER_MARGIN_MM,
            target.cabinet_height_mm - target.cabinet_thickness_mm - UPPER_MARGIN_MM,
        )
    }

    /// Pointer-down over a draggable part: spawns the ghost at the part's
    /// transform and a hidden snap indicator.
    pub fn begin(&mut self, target: DragTarget) {
        if self.active.is_some() {
            // A stray pointer-down mid-drag restarts cleanly.
            self.cancel();
        }

        let ghost = self.overlay.push(ScenePart {
            id: PartId {
                index: 0,
                generation: 0,
            },
            kind: PartKind::Ghost,
            shape: PartShape::Box,
            position: target.part_position,
            size: target.part_size,
            color: VALID_COLOR,
            opacity: GHOST_OPACITY,
            outline: Outline::Solid,
            pickable: None,
        });
        // Hidden until the first pointer move.
        let indicator = self.overlay.push(ScenePart {
            id: PartId {
                index: 0,
                generation: 0,
            },
            kind: PartKind::SnapIndicator,
            shape: PartShape::Box,
            position: target.part_position,
            size: Vec3::new(target.part_size.x * 1.2, 2.0, target.part_size.z * 1.2),
            color: [0.3, 0.55, 0.9],
            opacity: 0.0,
            outline: Outline::Solid,
            pickable: None,
        });

        debug!(module = %target.module, "Drag started");
        self.active = Some(ActiveDrag {
            candidate_mm: target.origin_mm,
            valid: true,
            moved: false,
            target,
            ghost,
            indicator,
        });
    }

    /// Pointer move: converts the accumulated vertical pixel delta into a
    /// clamped, snapped candidate position and refreshes the preview.
    pub fn update(&mut self, delta_y_px: f64) -> Option<DragFeedback> {
        let drag = self.active.as_mut()?;
        let (lower, upper) = Self::range(&drag.target);

        // Screen y grows downward; model y grows upward.
        let raw = drag.target.origin_mm - delta_y_px * DRAG_SENSITIVITY_MM_PER_PX;
        let clamped = raw.clamp(lower, upper.max(lower));
        let snapped = (clamped / SNAP_GRID_MM).round() * SNAP_GRID_MM;
        let snapped = snapped.clamp(lower, upper.max(lower));

        drag.candidate_mm = snapped;
        drag.valid = raw >= lower && raw <= upper;
        drag.moved = true;

        let ghost_y = drag.target.part_position.y + (snapped - drag.target.origin_mm) as f32;
        let color = if drag.valid { VALID_COLOR } else { INVALID_COLOR };
        if let Some(ghost) = self.overlay.get_mut(drag.ghost) {
            ghost.position.y = ghost_y;
            ghost.color = color;
        }
        if let Some(indicator) = self.overlay.get_mut(drag.indicator) {
            indicator.position.y = ghost_y;
            indicator.opacity = INDICATOR_OPACITY;
        }

        Some(DragFeedback {
            candidate_mm: snapped,
            valid: drag.valid,
        })
    }

    /// Pointer-up: commits the move when the last candidate was valid.
    /// The overlay is cleared and the selection restored in every case.
    pub fn end(&mut self) -> Option<WizardAction> {
        let drag = self.active.take()?;
        self.overlay.clear();

        if drag.moved && drag.valid {
            debug!(
                module = %drag.target.module,
                position = drag.candidate_mm,
                "Drag committed"
            );
            Some(WizardAction::MoveModule {
                cabinet: drag.target.cabinet,
                module: drag.target.module,
                position_mm: drag.candidate_mm,
            })
        } else {
            debug!(module = %drag.target.module, "Drag aborted");
            None
        }
    }

    /// Pointer-leave: equivalent to releasing at an invalid position.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            debug!("Drag cancelled");
        }
        self.overlay.clear();
    }
}
