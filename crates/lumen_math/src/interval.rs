use crate::Vec3;

/// A closed range of scalars, used for valid hit distances and color clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// The unit range [0, 1] that final pixel colors are clamped to.
    pub const UNIT: Interval = Interval::new(0.0, 1.0);

    /// Every strictly positive distance along a ray.
    pub const POSITIVE: Interval = Interval::new(0.0, f32::INFINITY);

    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Clamps every component of `v` to the interval.
    pub fn clamp_vec3(&self, v: Vec3) -> Vec3 {
        v.clamp(Vec3::splat(self.min), Vec3::splat(self.max))
    }
}
