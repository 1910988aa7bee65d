//! Pointer picking: screen position → world ray → nearest pickable part.

use furnkit_scene::{PartId, PickTag, SceneArena};
use glam::{Vec3, Vec4Swizzles};

use crate::camera::OrbitCamera;

/// A world-space ray.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Unprojects a pointer position (pixels, origin top-left) through the
    /// camera into a world ray.
    pub fn from_screen(
        camera: &OrbitCamera,
        pointer_x: f32,
        pointer_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        let ndc_x = 2.0 * pointer_x / viewport_width.max(1.0) - 1.0;
        let ndc_y = 1.0 - 2.0 * pointer_y / viewport_height.max(1.0);

        let inverse = camera.view_projection().inverse();
        let near = inverse * glam::Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far = inverse * glam::Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let near = near.xyz() / near.w;
        let far = far.xyz() / far.w;

        Self {
            origin: near,
            direction: (far - near).normalize(),
        }
    }

    /// Slab-method intersection against an axis-aligned box. Returns the
    /// entry distance along the ray, if any.
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let direction = self.direction[axis];
            if direction.abs() < 1e-8 {
                if origin < min[axis] || origin > max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / direction;
            let mut t0 = (min[axis] - origin) * inv;
            let mut t1 = (max[axis] - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        if t_max < 0.0 {
            return None;
        }
        Some(t_min.max(0.0))
    }
}

/// A successful pick against a draggable part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub part: PartId,
    pub tag: PickTag,
    pub distance: f32,
}

/// Finds the nearest pickable part along the ray.
pub fn pick(arena: &SceneArena, ray: &Ray) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for part in arena.parts() {
        let Some(tag) = part.pickable else {
            continue;
        };
        let (min, max) = part.bounds();
        let Some(distance) = ray.intersect_aabb(min, max) else {
            continue;
        };
        if best.map_or(true, |hit| distance < hit.distance) {
            best = Some(PickHit {
                part: part.id,
                tag,
                distance,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_hit_and_miss() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, -10.0),
            direction: Vec3::Z,
        };
        let hit = ray.intersect_aabb(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(hit.is_some());
        assert!((hit.unwrap() - 9.0).abs() < 1e-4);

        let miss = Ray {
            origin: Vec3::new(5.0, 0.0, -10.0),
            direction: Vec3::Z,
        };
        assert!(miss.intersect_aabb(Vec3::splat(-1.0), Vec3::splat(1.0)).is_none());
    }

    #[test]
    fn test_behind_ray_does_not_hit() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::Z,
        };
        assert!(ray.intersect_aabb(Vec3::splat(-1.0), Vec3::splat(1.0)).is_none());
    }
}
