//! Reflection and refraction of direction vectors.

use crate::Vec3;

/// Reflect `v` about the normal `n`.
///
/// `n` must be unit length; its orientation does not matter.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `v` through a surface with unit normal `n`.
///
/// `n` must face against `v` and `eta` is the ratio of the incident index to
/// the transmitted index. Returns `None` on total internal reflection.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Option<Vec3> {
    let n_dot_v = n.dot(v);
    let k = 1.0 - eta * eta * (1.0 - n_dot_v * n_dot_v);
    if k < 0.0 {
        return None;
    }
    Some(eta * v - (eta * n_dot_v + k.sqrt()) * n)
}
