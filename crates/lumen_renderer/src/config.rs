//! Render configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// How a primary ray is turned into radiance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    /// Recursive reflection/refraction with Monte Carlo roughness
    #[default]
    PathTraced,
    /// One hit lit by the scene's directional light, no bounces
    Direct,
}

/// Render configuration.
///
/// Every knob the renderer needs is carried here and passed down explicitly.
/// Missing fields fall back to [`RenderConfig::default`] when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Horizontal field of view in degrees
    pub fov_degrees: f32,
    /// Maximum ray bounce depth
    pub max_bounces: u32,
    /// Samples per pixel
    pub samples_per_pixel: u32,
    /// Worker threads in the scanline pool
    pub num_threads: usize,
    /// Distance bounce rays are pushed off the surface they leave
    pub ray_epsilon: f32,
    /// Base seed for the per-scanline generators
    pub seed: u64,
    /// Shading model
    pub shading: ShadingMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            fov_degrees: 90.0,
            max_bounces: 4,
            samples_per_pixel: 16,
            num_threads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            ray_epsilon: 0.001,
            seed: 0,
            shading: ShadingMode::PathTraced,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_bounces: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_bounces = max_bounces;
        self
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }

    /// Set the worker thread count.
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the bounce ray offset.
    pub fn with_ray_epsilon(mut self, ray_epsilon: f32) -> Self {
        self.ray_epsilon = ray_epsilon;
        self
    }

    /// Set the shading model.
    pub fn with_shading(mut self, shading: ShadingMode) -> Self {
        self.shading = shading;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Check that the configuration can produce an image.
    pub fn validate(&self) -> RenderResult<()> {
        let invalid = |msg: String| Err(RenderError::InvalidConfig(msg));

        if self.width == 0 || self.height == 0 {
            return invalid(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        if self.samples_per_pixel == 0 {
            return invalid("samples_per_pixel must be at least 1".into());
        }
        if self.num_threads == 0 {
            return invalid("num_threads must be at least 1".into());
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return invalid(format!(
                "fov_degrees must be in (0, 180), got {}",
                self.fov_degrees
            ));
        }
        if !(self.ray_epsilon.is_finite() && self.ray_epsilon > 0.0) {
            return invalid(format!(
                "ray_epsilon must be positive, got {}",
                self.ray_epsilon
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ray_epsilon, 0.001);
        assert_eq!(config.shading, ShadingMode::PathTraced);
    }

    #[test]
    fn test_builders() {
        let config = RenderConfig::default()
            .with_resolution(2, 2)
            .with_quality(1, 1)
            .with_threads(8)
            .with_seed(9);

        assert_eq!((config.width, config.height), (2, 2));
        assert_eq!((config.samples_per_pixel, config.max_bounces), (1, 1));
        assert_eq!(config.num_threads, 8);
        assert_eq!(config.seed, 9);
        assert_eq!(config.aspect_ratio(), 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = RenderConfig::default();

        assert!(base.with_resolution(0, 10).validate().is_err());
        assert!(base.with_quality(0, 4).validate().is_err());
        assert!(base.with_threads(0).validate().is_err());
        assert!(base.with_fov(180.0).validate().is_err());
        assert!(base.with_ray_epsilon(0.0).validate().is_err());
        assert!(base.with_ray_epsilon(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "width": 64, "height": 32, "shading": "direct" }"#).unwrap();

        assert_eq!((config.width, config.height), (64, 32));
        assert_eq!(config.shading, ShadingMode::Direct);
        assert_eq!(config.max_bounces, RenderConfig::default().max_bounces);
    }
}
