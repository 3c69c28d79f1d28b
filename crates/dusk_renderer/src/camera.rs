//! Fixed pinhole camera for ray generation.

use dusk_math::{Ray, Vec3};

/// Axis-aligned pinhole camera at the origin looking down -Z.
///
/// The image plane sits at z = -1 and spans [-1, 1] in x and y, giving a
/// 90 degree field of view on a square viewport.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create the standard pinhole camera.
    pub fn new() -> Self {
        Self {
            origin: Vec3::ZERO,
            lower_left_corner: Vec3::new(-1.0, -1.0, -1.0),
            horizontal: Vec3::new(2.0, 0.0, 0.0),
            vertical: Vec3::new(0.0, 2.0, 0.0),
        }
    }

    /// Ray through normalized image coordinates (u, v).
    ///
    /// (0, 0) is the lower-left corner of the image plane, (1, 1) the
    /// upper-right. The direction is not normalized.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
