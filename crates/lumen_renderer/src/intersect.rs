//! Closest-hit queries against the scene.
//!
//! Every query is a brute-force linear pass over the scene's primitives.

use lumen_core::{Scene, Shape};
use lumen_math::{Ray, Vec3};

/// Distance stored in a [`RayHit`] when nothing was hit.
pub const MISS_DISTANCE: f32 = -1.0;

/// Result of a closest-hit query.
///
/// `point`, `normal` and `material_index` are only meaningful when
/// [`RayHit::is_hit`] returns true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the ray, or [`MISS_DISTANCE`]
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal (see [`Intersect::normal_at`] for orientation)
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material_index: usize,
}

impl RayHit {
    /// The value returned for a ray that escapes the scene.
    pub const MISS: RayHit = RayHit {
        distance: MISS_DISTANCE,
        point: Vec3::ZERO,
        normal: Vec3::ZERO,
        material_index: 0,
    };

    /// Whether the query found a surface.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.distance >= 0.0
    }
}

/// Geometry that rays can be tested against.
pub trait Intersect {
    /// Distance to the nearest valid (strictly positive) intersection.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Unit normal at a point on the surface.
    ///
    /// Spheres always return the outward normal; triangles return the face
    /// normal on the side the ray arrived from.
    fn normal_at(&self, point: Vec3, ray: &Ray) -> Vec3;
}

impl Intersect for Shape {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Triangle(triangle) => triangle.intersect(ray),
        }
    }

    fn normal_at(&self, point: Vec3, ray: &Ray) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.normal_at(point, ray),
            Shape::Triangle(triangle) => triangle.normal_at(point, ray),
        }
    }
}

/// Find the closest surface hit by `ray`.
///
/// The first hit is taken as-is; later ones replace it only when strictly
/// closer, so earlier primitives win exact ties.
pub fn trace(ray: &Ray, scene: &Scene) -> RayHit {
    let mut closest = RayHit::MISS;

    for primitive in scene.primitives() {
        let Some(distance) = primitive.shape.intersect(ray) else {
            continue;
        };
        if closest.is_hit() && distance >= closest.distance {
            continue;
        }

        let point = ray.at(distance);
        closest = RayHit {
            distance,
            point,
            normal: primitive.shape.normal_at(point, ray),
            material_index: primitive.material_index,
        };
    }

    closest
}

/// Find the closest surface along `direction` from `origin`.
pub fn trace_ray(origin: Vec3, direction: Vec3, scene: &Scene) -> RayHit {
    trace(&Ray::new(origin, direction), scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Material;
    use lumen_math::Color;

    fn two_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        let near = scene.add_material(Material::new(Color::X));
        let far = scene.add_material(Material::new(Color::Y));
        // Far sphere first so insertion order cannot explain the result
        scene.add_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, far);
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, near);
        scene
    }

    #[test]
    fn test_miss_returns_sentinel() {
        let scene = two_sphere_scene();
        let hit = trace_ray(Vec3::ZERO, Vec3::NEG_Z, &scene);

        assert!(!hit.is_hit());
        assert_eq!(hit.distance, MISS_DISTANCE);
    }

    #[test]
    fn test_empty_scene_misses() {
        let hit = trace_ray(Vec3::ZERO, Vec3::Z, &Scene::new());
        assert_eq!(hit, RayHit::MISS);
    }

    #[test]
    fn test_sphere_distance_and_normal() {
        let mut scene = Scene::new();
        let m = scene.add_material(Material::default());
        let center = Vec3::new(0.0, 0.0, 5.0);
        scene.add_sphere(center, 1.0, m);

        let hit = trace_ray(Vec3::ZERO, Vec3::Z, &scene);
        assert!(hit.is_hit());
        assert!((hit.distance - 4.0).abs() < 1e-5);

        let outward = (hit.point - center).normalize();
        assert!((hit.normal.dot(outward) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_closest_hit_wins() {
        let scene = two_sphere_scene();
        let hit = trace_ray(Vec3::ZERO, Vec3::Z, &scene);

        assert!((hit.distance - 4.0).abs() < 1e-5);
        assert_eq!(hit.material_index, 0);
    }

    #[test]
    fn test_exact_tie_keeps_earlier_primitive() {
        let mut scene = Scene::new();
        let first = scene.add_material(Material::new(Color::X));
        let second = scene.add_material(Material::new(Color::Y));
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, first);
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, second);

        let hit = trace_ray(Vec3::ZERO, Vec3::Z, &scene);
        assert_eq!(hit.material_index, first);
    }

    #[test]
    fn test_triangle_in_front_of_sphere() {
        let mut scene = Scene::new();
        let ball = scene.add_material(Material::default());
        let wall = scene.add_material(Material::default());
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, ball);
        scene.add_triangle(
            Vec3::new(-1.0, -1.0, 2.0),
            Vec3::new(1.0, -1.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
            wall,
        );

        let hit = trace_ray(Vec3::ZERO, Vec3::Z, &scene);
        assert_eq!(hit.material_index, wall);
        assert!((hit.distance - 2.0).abs() < 1e-5);
        assert!(hit.normal.dot(Vec3::Z) < 0.0);
    }
}
