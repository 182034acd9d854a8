// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod optics;
mod ray;

pub use interval::Interval;
pub use optics::{reflect, refract};
pub use ray::Ray;

/// RGB color with linear components, nominally in [0, 1].
pub type Color = Vec3;
