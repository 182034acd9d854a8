//! Pinhole camera for primary ray generation.
//!
//! The camera sits at the origin looking down +Z with +Y up. Screen
//! coordinates span [-1, 1] on both axes, +Y at the top of the image.

use crate::RenderConfig;
use lumen_math::{Ray, Vec3};

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Image width over height
    aspect_ratio: f32,
    /// Cached tan(fov / 2)
    tan_half_fov: f32,
}

impl Camera {
    /// Create a camera from a field of view (degrees) and aspect ratio.
    pub fn new(fov_degrees: f32, aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            tan_half_fov: (fov_degrees.to_radians() / 2.0).tan(),
        }
    }

    /// Create a camera matching a render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.fov_degrees, config.aspect_ratio())
    }

    /// Primary ray through the screen point `(x, y)`.
    pub fn ray(&self, x: f32, y: f32) -> Ray {
        let direction = Vec3::new(
            x * self.tan_half_fov,
            y * self.tan_half_fov / self.aspect_ratio,
            1.0,
        );
        Ray::new(Vec3::ZERO, direction.normalize())
    }
}

/// Map pixel `(px, py)` of a `width` x `height` image to screen coordinates.
///
/// Row 0 is the top of the image, so it maps to `y = 1`.
pub fn screen_coords(px: u32, py: u32, width: u32, height: u32) -> (f32, f32) {
    let x = px as f32 / width as f32 * 2.0 - 1.0;
    let y = -(py as f32 / height as f32 * 2.0 - 1.0);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_z() {
        let camera = Camera::new(90.0, 16.0 / 9.0);
        let ray = camera.ray(0.0, 0.0);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_edge_ray_matches_fov() {
        // 90 degree fov: the right edge is 45 degrees off axis
        let camera = Camera::new(90.0, 1.0);
        let ray = camera.ray(1.0, 0.0);

        let expected = Vec3::new(1.0, 0.0, 1.0).normalize();
        assert!((ray.direction() - expected).length() < 1e-5);
    }

    #[test]
    fn test_vertical_extent_scaled_by_aspect() {
        let camera = Camera::new(90.0, 2.0);
        let ray = camera.ray(0.0, 1.0);

        let expected = Vec3::new(0.0, 0.5, 1.0).normalize();
        assert!((ray.direction() - expected).length() < 1e-5);
    }

    #[test]
    fn test_screen_coords() {
        assert_eq!(screen_coords(0, 0, 4, 4), (-1.0, 1.0));
        assert_eq!(screen_coords(2, 2, 4, 4), (0.0, 0.0));
        assert_eq!(screen_coords(3, 1, 4, 4), (0.5, 0.5));
    }
}
