//! Mirror modifier
//!
//! Folds the evaluation point onto the positive half-space of one axis by
//! taking the absolute value of that coordinate. Whatever a field defines on
//! the positive side is then repeated, reflected, on the negative side.

use glam::Vec3;

use crate::types::Axis;

/// Mirror point across the plane `axis = 0`
#[inline(always)]
pub fn modifier_mirror_axis(p: Vec3, axis: Axis) -> Vec3 {
    match axis {
        Axis::X => Vec3::new(p.x.abs(), p.y, p.z),
        Axis::Y => Vec3::new(p.x, p.y.abs(), p.z),
        Axis::Z => Vec3::new(p.x, p.y, p.z.abs()),
    }
}

/// Reflect a point across the plane `axis = 0` (no folding)
#[inline(always)]
pub fn reflect_axis(p: Vec3, axis: Axis) -> Vec3 {
    match axis {
        Axis::X => Vec3::new(-p.x, p.y, p.z),
        Axis::Y => Vec3::new(p.x, -p.y, p.z),
        Axis::Z => Vec3::new(p.x, p.y, -p.z),
    }
}
