use crate::Vec3;

/// A ray in 3D space: a half-line starting at `origin` and travelling
/// along `direction`.
///
/// Rays produced by the camera and by surface bounces carry unit-length
/// directions, so `t` in [`Ray::at`] is a distance in scene units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray whose origin is pushed `epsilon` along its direction.
    ///
    /// Bounce rays start on the surface they left; the offset keeps them from
    /// immediately re-hitting it.
    pub fn offset(point: Vec3, direction: Vec3, epsilon: f32) -> Self {
        Self::new(point + direction * epsilon, direction)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
