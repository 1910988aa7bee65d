use glam::{Mat4, Vec3};

/// Orbit camera around a target point. Y-up convention.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,   // radians
    pub pitch: f32, // radians
    pub fov: f32,   // degrees
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 3000.0,
            yaw: -45.0f32.to_radians(),
            pitch: 25.0f32.to_radians(),
            fov: 45.0,
            aspect_ratio: 1.0,
            near: 10.0,
            far: 50_000.0,
            min_distance: 200.0,
            max_distance: 40_000.0,
        }
    }
}

impl OrbitCamera {
    pub fn new(target: Vec3, distance: f32) -> Self {
        Self {
            target,
            distance,
            ..Default::default()
        }
    }

    pub fn update_aspect_ratio(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect_ratio = width / height;
        }
    }

    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;

        // Clamp pitch to avoid flipping over the poles
        let limit = 89.0f32.to_radians();
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance -= delta;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        // Re-derive the camera basis from yaw/pitch.
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        // Y-up convention:
        // x = r * cos(pitch) * cos(yaw)
        // y = r * sin(pitch)
        // z = r * cos(pitch) * sin(yaw)
        let offset_dir = Vec3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize();
        let forward = -offset_dir;

        // Handle singularity when looking straight up/down
        let world_up = if forward.cross(Vec3::Y).length_squared() < 0.001 {
            Vec3::Z
        } else {
            Vec3::Y
        };

        let cam_right = forward.cross(world_up).normalize();
        let cam_up = cam_right.cross(forward).normalize();

        // Pan speed scales with distance
        let scale = self.distance * 0.001;

        self.target -= cam_right * delta_x * scale;
        self.target += cam_up * delta_y * scale;
    }

    pub fn eye_position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        let offset =
            Vec3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw) * self.distance;

        self.target + offset
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye_position();
        let forward = (self.target - eye).normalize();

        let up = if forward.cross(Vec3::Y).length_squared() < 0.001 {
            Vec3::Z
        } else {
            Vec3::Y
        };

        Mat4::look_at_rh(eye, self.target, up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_view(&mut self, yaw_deg: f32, pitch_deg: f32) {
        self.yaw = yaw_deg.to_radians();
        self.pitch = pitch_deg.to_radians();
    }

    /// Aims at the model center and backs off far enough that the whole
    /// bounding extent fits the frustum without clipping.
    pub fn fit(&mut self, center: Vec3, extent: f32) {
        self.target = center;

        // tan(fov/2) = (extent/2) / distance, with a margin factor
        let fov_rad = self.fov.to_radians();
        let distance = (extent * 1.2) / (fov_rad / 2.0).tan();

        self.distance = distance.clamp(self.min_distance, self.max_distance);
    }
}
