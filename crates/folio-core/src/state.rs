//! Camera description shared by the lanyard rig and the web renderer.
//!
//! The camera stays platform-free: the rig uses it to turn pointer positions
//! into world-space rays and drag targets, and the renderer uses the same
//! matrices so what the user grabs is what they see.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_POSITION};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_POSITION,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Map a point in normalized device coordinates (depth in \[0, 1\]) back
    /// to world space.
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        let p = self.view_proj().inverse() * Vec4::new(ndc.x, ndc.y, ndc.z, 1.0);
        p.truncate() / p.w
    }

    /// Project a world-space point into normalized device coordinates.
    pub fn project(&self, world: Vec3) -> Vec3 {
        let p = self.view_proj() * world.extend(1.0);
        p.truncate() / p.w
    }

    /// World-space ray through a pointer position given in NDC.
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let far = self.unproject(Vec3::new(ndc.x, ndc.y, 1.0));
        (self.eye, (far - self.eye).normalize_or_zero())
    }
}
