//! Ray-triangle intersection.
//!
//! Uses the Möller-Trumbore algorithm.

use crate::intersect::Intersect;
use lumen_core::Triangle;
use lumen_math::{Interval, Ray, Vec3};

/// Determinant and distance threshold for triangle hits.
const EPSILON: f32 = 1e-6;

impl Intersect for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);
        if !Interval::UNIT.contains(u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        (t > EPSILON).then_some(t)
    }

    /// Face normal, flipped so it faces the side the ray came from.
    fn normal_at(&self, _point: Vec3, ray: &Ray) -> Vec3 {
        let normal = (self.v0 - self.v1).cross(self.v0 - self.v2).normalize_or_zero();
        if normal.dot(ray.direction()) > 0.0 {
            -normal
        } else {
            normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle(z: f32) -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, z),
            Vec3::new(1.0, -1.0, z),
            Vec3::new(0.0, 1.0, z),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let tri = unit_triangle(-1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let t = tri.intersect(&ray).unwrap();
        assert!((t - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_triangle_miss_behind() {
        let tri = unit_triangle(-1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_miss_outside_bounds() {
        let tri = unit_triangle(-1.0);
        let ray = Ray::new(Vec3::new(3.0, 0.0, 0.0), Vec3::NEG_Z);

        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_edge_counts_as_hit() {
        // Midpoint of the v0-v2 edge, where the barycentric u is exactly 0
        let tri = unit_triangle(-1.0);
        let ray = Ray::new(Vec3::new(-0.5, 0.0, 0.0), Vec3::NEG_Z);

        let t = tri.intersect(&ray).unwrap();
        assert!((t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_triangle_parallel_ray() {
        let tri = unit_triangle(-1.0);
        let ray = Ray::new(Vec3::new(-5.0, 0.0, -1.0), Vec3::X);

        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_normal_faces_ray_from_both_sides() {
        let tri = unit_triangle(0.0);

        let from_front = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);
        let n = tri.normal_at(Vec3::ZERO, &from_front);
        assert!(n.dot(from_front.direction()) < 0.0);
        assert!((n.length() - 1.0).abs() < 1e-6);

        let from_back = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z);
        let n = tri.normal_at(Vec3::ZERO, &from_back);
        assert!(n.dot(from_back.direction()) < 0.0);
    }
}
