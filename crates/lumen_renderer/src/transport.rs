//! Light transport: estimating the radiance arriving along a ray.
//!
//! [`incident_light`] is the path traced estimator: it recursively follows
//! reflected and refracted rays, bounded by `RenderConfig::max_bounces`.
//! [`direct_light`] is the single-hit shading mode that only uses the
//! scene's directional light.

use std::ops::AddAssign;

use lumen_core::Scene;
use lumen_math::{reflect, refract, Color, Ray};
use rand::RngCore;

use crate::intersect::trace;
use crate::sampling::random_unit_vector;
use crate::RenderConfig;

/// Scale applied to `roughness` when jittering the bounce normal.
pub const ROUGHNESS_SPREAD: f32 = 0.5;

/// Counters describing what the estimator did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathStats {
    /// Closest-hit queries issued
    pub rays: u64,
    /// Reflection branches followed
    pub reflected: u64,
    /// Refraction branches followed
    pub transmitted: u64,
    /// Refraction attempts that hit total internal reflection
    pub internal_reflections: u64,
}

impl AddAssign for PathStats {
    fn add_assign(&mut self, other: Self) {
        self.rays += other.rays;
        self.reflected += other.reflected;
        self.transmitted += other.transmitted;
        self.internal_reflections += other.internal_reflections;
    }
}

/// Estimate the radiance arriving at `ray.origin` from `ray.direction`.
///
/// Rays past the bounce budget and rays that escape the scene both return
/// the sky color. Each recursive call adds one to `depth`, and the
/// reflection and refraction branches each get their own sub-budget from
/// that point.
pub fn incident_light(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
    stats: &mut PathStats,
) -> Color {
    if depth > config.max_bounces {
        return scene.sky_color;
    }

    stats.rays += 1;
    let hit = trace(ray, scene);
    if !hit.is_hit() {
        return scene.sky_color;
    }

    let material = scene.material(hit.material_index);
    let emitted = material.emitted();

    // Rough surfaces scatter by jittering the normal; roughness 0 is a mirror
    let deviation = random_unit_vector(rng) * (material.roughness * ROUGHNESS_SPREAD);
    let normal = (hit.normal + deviation).normalize_or_zero();

    let direction = ray.direction();
    let next_depth = depth + 1;

    let mut reflected = Color::ZERO;
    if material.transparency < 1.0 {
        stats.reflected += 1;
        let bounce = reflect(direction, normal).normalize_or_zero();
        let bounce_ray = Ray::offset(hit.point, bounce, config.ray_epsilon);
        reflected = incident_light(&bounce_ray, scene, next_depth, config, rng, stats);
    }

    let mut transmitted = Color::ZERO;
    if material.transparency > 0.0 {
        // Sphere normals point outward, so a positive dot means we are leaving
        let (eta, facing) = if direction.dot(normal) < 0.0 {
            (1.0 / material.refractive_index, normal)
        } else {
            (material.refractive_index, -normal)
        };

        match refract(direction, facing, eta) {
            Some(bent) => {
                stats.transmitted += 1;
                let bent_ray = Ray::offset(hit.point, bent.normalize_or_zero(), config.ray_epsilon);
                transmitted = incident_light(&bent_ray, scene, next_depth, config, rng, stats);
            }
            None => stats.internal_reflections += 1,
        }
    }

    let incoming = reflected.lerp(transmitted, material.transparency);
    emitted + incoming * material.albedo
}

/// Shade the first surface along `ray` with the scene's directional light.
///
/// Without a directional light the surface is lit by the sky color. Misses
/// return the sky color.
pub fn direct_light(
    ray: &Ray,
    scene: &Scene,
    config: &RenderConfig,
    stats: &mut PathStats,
) -> Color {
    stats.rays += 1;
    let hit = trace(ray, scene);
    if !hit.is_hit() {
        return scene.sky_color;
    }

    let material = scene.material(hit.material_index);
    let normal = if hit.normal.dot(ray.direction()) > 0.0 {
        -hit.normal
    } else {
        hit.normal
    };

    let light = match scene.sun {
        None => scene.sky_color,
        Some(sun) => {
            let to_light = -sun.direction;
            let lambert = normal.dot(to_light).max(0.0);
            if lambert > 0.0 {
                stats.rays += 1;
                let shadow_ray = Ray::offset(hit.point, to_light, config.ray_epsilon);
                if trace(&shadow_ray, scene).is_hit() {
                    Color::ZERO
                } else {
                    sun.color * lambert
                }
            } else {
                Color::ZERO
            }
        }
    };

    material.emitted() + material.albedo * light
}
