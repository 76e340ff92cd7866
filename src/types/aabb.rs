//! Axis-aligned bounding box used as a field domain
//!
//! A domain marks where a field's values are meaningful. Outside of it the
//! field is still evaluated (fields are total), but callers decide how much
//! to trust the result.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::Axis;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Box containing nothing; the identity for [`Aabb::union`]
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Create a new AABB
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Aabb { min, max }
    }

    /// Create from center and half-extents
    pub fn from_center_extents(center: Vec3, half_extents: Vec3) -> Self {
        Aabb {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest box containing every point
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points.into_iter().fold(Aabb::EMPTY, |acc, p| Aabb {
            min: acc.min.min(p),
            max: acc.max.max(p),
        })
    }

    /// True when min exceeds max on any axis
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Get center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get size
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if point is inside
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Grow every side by `amount`
    pub fn expand(&self, amount: f32) -> Aabb {
        if self.is_empty() {
            return *self;
        }
        Aabb {
            min: self.min - Vec3::splat(amount),
            max: self.max + Vec3::splat(amount),
        }
    }

    /// Expand to include another AABB
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Reflect the box across the plane `axis = 0`
    pub fn reflect(&self, axis: Axis) -> Aabb {
        if self.is_empty() {
            return *self;
        }
        let flip = axis.unit() * -2.0 + Vec3::ONE;
        let a = self.min * flip;
        let b = self.max * flip;
        Aabb {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_with_empty_is_identity() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(Aabb::EMPTY.union(&a), a);
        assert_eq!(a.union(&Aabb::EMPTY), a);
        assert!(Aabb::EMPTY.is_empty());
        assert!(!a.is_empty());
    }

    #[test]
    fn test_from_points() {
        let b = Aabb::from_points([Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, 0.0)]);
        assert_eq!(b.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 2.0, 3.0));
        assert!(Aabb::from_points([]).is_empty());
    }

    #[test]
    fn test_reflect_x() {
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 1.0));
        let r = b.reflect(Axis::X);
        assert_eq!(r.min, Vec3::new(-3.0, 0.0, 0.0));
        assert_eq!(r.max, Vec3::new(-1.0, 1.0, 1.0));
    }

    #[test]
    fn test_expand_and_contains() {
        let b = Aabb::from_center_extents(Vec3::ZERO, Vec3::ONE).expand(0.5);
        assert!(b.contains(Vec3::splat(1.4)));
        assert!(!b.contains(Vec3::splat(1.6)));
        assert_eq!(b.center(), Vec3::ZERO);
        assert_eq!(b.size(), Vec3::splat(3.0));
    }
}
