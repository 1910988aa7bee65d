//! # Furnkit Viewport
//!
//! The interactive side of the configurator: an orbit camera, a
//! free-running render loop, ray picking against the scene arena, and the
//! pointer-drag protocol that repositions cabinet modules with snapping and
//! bounds validation.

mod camera;
mod drag;
mod picking;
mod render_loop;

pub use camera::OrbitCamera;
pub use drag::{
    DragController, DragFeedback, DragTarget, DRAG_SENSITIVITY_MM_PER_PX, LOWER_MARGIN_MM,
    SNAP_GRID_MM, UPPER_MARGIN_MM,
};
pub use picking::{pick, PickHit, Ray};
pub use render_loop::{FrameStats, RenderLoop};
