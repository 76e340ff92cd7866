//! Capsule primitive SDFs (line segments with radius)
//!
//! Both variants share one segment projection; the tapered one blends
//! the radius along it.

use glam::Vec3;

/// Parameter of the point on segment `a..b` closest to `point`, in `[0, 1]`
///
/// Degenerate segments (`a == b`) project everything onto `a`.
#[inline(always)]
fn segment_param(point: Vec3, a: Vec3, b: Vec3) -> f32 {
    let ba = b - a;
    let len_sq = ba.dot(ba);
    if len_sq <= f32::EPSILON {
        return 0.0;
    }
    ((point - a).dot(ba) / len_sq).clamp(0.0, 1.0)
}

/// Signed distance to a capsule (line segment with radius)
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `a` - Start point of capsule axis
/// * `b` - End point of capsule axis
/// * `radius` - Capsule radius
///
/// # Returns
/// Signed distance (negative inside, positive outside)
#[inline(always)]
pub fn sdf_capsule(point: Vec3, a: Vec3, b: Vec3, radius: f32) -> f32 {
    let h = segment_param(point, a, b);
    (point - a - (b - a) * h).length() - radius
}

/// Capsule whose radius blends linearly from `radius_a` at `a` to `radius_b` at `b`
///
/// The radius is taken at the closest point on the axis, so this is a
/// distance bound rather than an exact distance when the radii differ.
#[inline(always)]
pub fn sdf_tapered_capsule(point: Vec3, a: Vec3, b: Vec3, radius_a: f32, radius_b: f32) -> f32 {
    let h = segment_param(point, a, b);
    let radius = radius_a + (radius_b - radius_a) * h;
    (point - a - (b - a) * h).length() - radius
}
