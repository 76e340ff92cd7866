//! Boolean CSG combinators on signed values
//!
//! Negative means inside. Union keeps whichever shape is closer to being
//! inside; subtraction flips the carving shape so its interior becomes the
//! region that is pushed outside.

/// Union of two signed values (minimum)
#[inline(always)]
pub fn sdf_union(d1: f32, d2: f32) -> f32 {
    d1.min(d2)
}

/// Subtraction of B from A: `max(d1, -d2)`
#[inline(always)]
pub fn sdf_subtraction(d1: f32, d2: f32) -> f32 {
    d1.max(-d2)
}
