//! Additive blending (metaball style)
//!
//! Overlapping influences add up, so two nearby blobs melt into one surface
//! instead of intersecting with a crease like [`super::sdf_union`] does.

use std::ops::Add;

/// Sum of any number of field values
///
/// An empty slice sums to `T::default()` (zero for scalars and glam vectors).
#[inline]
pub fn field_sum<T>(values: impl IntoIterator<Item = T>) -> T
where
    T: Add<Output = T> + Default,
{
    values.into_iter().fold(T::default(), |acc, v| acc + v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_sum_scalars() {
        assert_eq!(field_sum([1.0f32, -2.5, 4.0]), 2.5);
    }

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(field_sum(Vec::<f32>::new()), 0.0);
        assert_eq!(field_sum(Vec::<Vec3>::new()), Vec3::ZERO);
    }

    #[test]
    fn test_sum_vectors() {
        let s = field_sum([Vec3::X, Vec3::Y, Vec3::new(0.0, 1.0, 2.0)]);
        assert_eq!(s, Vec3::new(1.0, 2.0, 2.0));
    }
}
