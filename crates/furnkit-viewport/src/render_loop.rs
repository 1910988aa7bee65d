//! The free-running render loop.
//!
//! The loop redraws the last-built scene every frame whether or not the
//! configuration changed; configuration edits swap the arena contents out
//! from under it, never the loop itself.

use furnkit_scene::{frame_scene, SceneArena};

use crate::camera::OrbitCamera;

/// Per-frame statistics handed back to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub parts_drawn: usize,
}

/// Owns the camera and the frame counter.
#[derive(Debug)]
pub struct RenderLoop {
    camera: OrbitCamera,
    frame: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::default(),
            frame: 0,
        }
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Draws one frame: the scene plus any transient overlay, regardless of
    /// whether anything changed since the previous frame.
    pub fn tick(&mut self, scene: &SceneArena, overlay: &SceneArena) -> FrameStats {
        self.frame += 1;
        FrameStats {
            frame: self.frame,
            parts_drawn: scene.len() + overlay.len(),
        }
    }

    /// Re-aims the camera at the current model after a rebuild.
    pub fn focus(&mut self, scene: &SceneArena) {
        let (center, extent) = frame_scene(scene);
        self.camera.fit(center, extent);
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}
