//! Ray-sphere intersection.

use crate::intersect::Intersect;
use lumen_core::Sphere;
use lumen_math::{Interval, Ray, Vec3};

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root first; the far root only counts when the origin is inside
        let near = (-h - sqrtd) / a;
        if Interval::POSITIVE.surrounds(near) {
            return Some(near);
        }
        let far = (-h + sqrtd) / a;
        Interval::POSITIVE.surrounds(far).then_some(far)
    }

    fn normal_at(&self, point: Vec3, _ray: &Ray) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }
}
