//! Composite fields
//!
//! Each composite owns `Arc`s to its children and computes its domain once,
//! at construction. Domain rules:
//!
//! | Composite       | Domain                                            |
//! |-----------------|---------------------------------------------------|
//! | [`SumField`]    | bounding union of all children                    |
//! | [`UnionField`]  | bounding union of both children                   |
//! | [`SubtractField`] | domain of the minuend                           |
//! | [`MirrorField`] | child domain united with its reflection           |

use std::ops::Add;

use glam::Vec3;

use super::{Field, SharedField};
use crate::modifiers::modifier_mirror_axis;
use crate::operations::{field_sum, sdf_subtraction, sdf_union};
use crate::types::{Aabb, Axis};

/// Additive blend of any number of fields
///
/// Works for every channel type that can be added (`f32`, `Vec2`, `Vec3`).
/// With no children the field is zero everywhere and its domain is empty.
#[derive(Clone)]
pub struct SumField<T = f32> {
    children: Vec<SharedField<T>>,
    domain: Aabb,
}

impl<T> SumField<T> {
    /// Sum the given fields
    pub fn new(children: Vec<SharedField<T>>) -> Self {
        let domain = children
            .iter()
            .fold(Aabb::EMPTY, |acc, c| acc.union(&c.domain()));
        SumField { children, domain }
    }

    /// Number of summed fields
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when nothing is summed
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T> Field<T> for SumField<T>
where
    T: Add<Output = T> + Default,
{
    #[inline]
    fn evaluate(&self, point: Vec3) -> T {
        field_sum(self.children.iter().map(|c| c.evaluate(point)))
    }

    fn domain(&self) -> Aabb {
        self.domain
    }
}

/// CSG union: `min(a, b)`
#[derive(Clone)]
pub struct UnionField {
    a: SharedField,
    b: SharedField,
    domain: Aabb,
}

impl UnionField {
    /// Union of `a` and `b`
    pub fn new(a: SharedField, b: SharedField) -> Self {
        let domain = a.domain().union(&b.domain());
        UnionField { a, b, domain }
    }
}

impl Field<f32> for UnionField {
    #[inline]
    fn evaluate(&self, point: Vec3) -> f32 {
        sdf_union(self.a.evaluate(point), self.b.evaluate(point))
    }

    fn domain(&self) -> Aabb {
        self.domain
    }
}

/// CSG subtraction: `max(a, -b)`
#[derive(Clone)]
pub struct SubtractField {
    a: SharedField,
    b: SharedField,
}

impl SubtractField {
    /// Carve `b` out of `a`
    pub fn new(a: SharedField, b: SharedField) -> Self {
        SubtractField { a, b }
    }
}

impl Field<f32> for SubtractField {
    #[inline]
    fn evaluate(&self, point: Vec3) -> f32 {
        sdf_subtraction(self.a.evaluate(point), self.b.evaluate(point))
    }

    // Never larger than the minuend.
    fn domain(&self) -> Aabb {
        self.a.domain()
    }
}

/// Evaluates the child at the point folded onto the positive side of `axis`
#[derive(Clone)]
pub struct MirrorField<T = f32> {
    child: SharedField<T>,
    axis: Axis,
    domain: Aabb,
}

impl<T> MirrorField<T> {
    /// Mirror `child` across the plane `axis = 0`
    pub fn new(child: SharedField<T>, axis: Axis) -> Self {
        let d = child.domain();
        let domain = d.union(&d.reflect(axis));
        MirrorField { child, axis, domain }
    }

    /// Mirrored axis
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

impl<T> Field<T> for MirrorField<T> {
    #[inline]
    fn evaluate(&self, point: Vec3) -> T {
        self.child.evaluate(modifier_mirror_axis(point, self.axis))
    }

    fn domain(&self) -> Aabb {
        self.domain
    }
}

impl<T> std::fmt::Debug for SumField<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SumField")
            .field("children", &self.children.len())
            .field("domain", &self.domain)
            .finish()
    }
}

impl std::fmt::Debug for UnionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionField").field("domain", &self.domain).finish_non_exhaustive()
    }
}

impl std::fmt::Debug for SubtractField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubtractField")
            .field("domain", &self.a.domain())
            .finish_non_exhaustive()
    }
}

impl<T> std::fmt::Debug for MirrorField<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MirrorField")
            .field("axis", &self.axis)
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}
