//! Fields: continuous shape functions and their composition algebra
//!
//! A [`Field`] maps a point in space to a value. Scalar fields describe
//! geometry under the signed convention (negative inside, positive outside);
//! `Vec2`/`Vec3` fields carry secondary attributes such as color.
//!
//! Fields are immutable. Combinators ([`SumField`], [`UnionField`],
//! [`SubtractField`], [`MirrorField`]) share their children through `Arc`
//! and never mutate them, so one field can feed any number of composites and
//! be evaluated from many threads at once.
//!
//! ## Totality
//!
//! Every field must return a finite value for every point, including points
//! outside its declared [`domain`](Field::domain). Interpolation on the
//! canvas cannot recover from NaN: a non-finite sample produces holes or NaN
//! vertices in the extracted mesh. Fields that are genuinely undefined
//! somewhere should return [`FAR_OUTSIDE`] there, or be wrapped with
//! [`ScalarFieldExt::clipped`] / [`ScalarFieldExt::finite`].
//!
//! ## Example
//!
//! ```rust
//! use sdf_canvas::prelude::*;
//!
//! let body = SphereField::new(Vec3::splat(8.0), 4.0, 1.0);
//! let bite = SphereField::new(Vec3::new(11.0, 8.0, 8.0), 2.0, 1.0);
//! let shape = body.subtract(bite).mirror(Axis::Z);
//!
//! assert!(shape.evaluate(Vec3::splat(8.0)) < 0.0);
//! ```

mod channels;
mod combinators;
mod shapes;

pub use channels::{FieldChannels, COLOR_ATTRIBUTE, POSITION_ATTRIBUTE};
pub use combinators::{MirrorField, SubtractField, SumField, UnionField};
pub use shapes::{LineField, LinePoint, SphereField, VaryingThicknessLine};

use std::sync::Arc;

use glam::Vec3;

use crate::types::{Aabb, Axis};

/// Value returned for points a field has nothing meaningful to say about
///
/// Large enough to dominate any realistic blend, small enough that sums of
/// a few of them stay finite in `f32`.
pub const FAR_OUTSIDE: f32 = 1.0e6;

/// A pure function from a point in space to a value of type `T`
pub trait Field<T = f32>: Send + Sync {
    /// Evaluate the field at `point`
    ///
    /// Must be side-effect free and defined for every point.
    fn evaluate(&self, point: Vec3) -> T;

    /// Region where the field's values are meaningful
    fn domain(&self) -> Aabb;
}

/// Reference-counted, type-erased field
pub type SharedField<T = f32> = Arc<dyn Field<T>>;

impl<T, F> Field<T> for Arc<F>
where
    F: Field<T> + ?Sized,
{
    #[inline]
    fn evaluate(&self, point: Vec3) -> T {
        (**self).evaluate(point)
    }

    fn domain(&self) -> Aabb {
        (**self).domain()
    }
}

impl<T, F> Field<T> for &F
where
    F: Field<T> + ?Sized,
{
    #[inline]
    fn evaluate(&self, point: Vec3) -> T {
        (**self).evaluate(point)
    }

    fn domain(&self) -> Aabb {
        (**self).domain()
    }
}

/// Field backed by a closure
///
/// ```rust
/// use sdf_canvas::prelude::*;
///
/// let ground = FnField::new(Aabb::new(Vec3::ZERO, Vec3::splat(16.0)), |p: Vec3| p.y - 2.0);
/// assert_eq!(ground.evaluate(Vec3::new(1.0, 5.0, 1.0)), 3.0);
/// ```
#[derive(Clone)]
pub struct FnField<F> {
    domain: Aabb,
    func: F,
}

impl<F> FnField<F> {
    /// Wrap `func` with the given domain
    pub fn new(domain: Aabb, func: F) -> Self {
        FnField { domain, func }
    }
}

impl<T, F> Field<T> for FnField<F>
where
    F: Fn(Vec3) -> T + Send + Sync,
{
    #[inline]
    fn evaluate(&self, point: Vec3) -> T {
        (self.func)(point)
    }

    fn domain(&self) -> Aabb {
        self.domain
    }
}

impl<F> std::fmt::Debug for FnField<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnField").field("domain", &self.domain).finish_non_exhaustive()
    }
}

/// Scalar field that reports [`FAR_OUTSIDE`] everywhere outside its domain
#[derive(Debug, Clone)]
pub struct Clipped<F> {
    inner: F,
}

impl<F: Field<f32>> Field<f32> for Clipped<F> {
    #[inline]
    fn evaluate(&self, point: Vec3) -> f32 {
        if self.inner.domain().contains(point) {
            self.inner.evaluate(point)
        } else {
            FAR_OUTSIDE
        }
    }

    fn domain(&self) -> Aabb {
        self.inner.domain()
    }
}

/// Scalar field whose non-finite results are replaced by `±FAR_OUTSIDE`
///
/// NaN maps to `+FAR_OUTSIDE` (treated as outside), infinities keep their sign.
#[derive(Debug, Clone)]
pub struct Finite<F> {
    inner: F,
}

impl<F: Field<f32>> Field<f32> for Finite<F> {
    #[inline]
    fn evaluate(&self, point: Vec3) -> f32 {
        let v = self.inner.evaluate(point);
        if v.is_finite() {
            v
        } else if v == f32::NEG_INFINITY {
            -FAR_OUTSIDE
        } else {
            FAR_OUTSIDE
        }
    }

    fn domain(&self) -> Aabb {
        self.inner.domain()
    }
}

/// Chaining helpers available on every field
pub trait FieldExt<T: 'static>: Field<T> + Sized + 'static {
    /// Erase the concrete type
    fn shared(self) -> SharedField<T> {
        Arc::new(self)
    }

    /// Mirror across the plane `axis = 0`
    fn mirror(self, axis: Axis) -> MirrorField<T> {
        MirrorField::new(Arc::new(self), axis)
    }
}

impl<T: 'static, F: Field<T> + 'static> FieldExt<T> for F {}

/// Chaining helpers for scalar (geometry) fields
pub trait ScalarFieldExt: Field<f32> + Sized + 'static {
    /// CSG union with `other`
    fn union(self, other: impl Field<f32> + 'static) -> UnionField {
        UnionField::new(Arc::new(self), Arc::new(other))
    }

    /// Carve `other` out of this field
    fn subtract(self, other: impl Field<f32> + 'static) -> SubtractField {
        SubtractField::new(Arc::new(self), Arc::new(other))
    }

    /// Additive blend with `other`
    fn blend(self, other: impl Field<f32> + 'static) -> SumField<f32> {
        SumField::new(vec![Arc::new(self) as SharedField, Arc::new(other) as SharedField])
    }

    /// Report [`FAR_OUTSIDE`] outside the domain
    fn clipped(self) -> Clipped<Self> {
        Clipped { inner: self }
    }

    /// Replace non-finite results with `±FAR_OUTSIDE`
    fn finite(self) -> Finite<Self> {
        Finite { inner: self }
    }
}

impl<F: Field<f32> + 'static> ScalarFieldExt for F {}
