//! Primitive geometry fields
//!
//! Signed distances scaled by a `strength` factor. A strength of `1.0`
//! gives the plain distance; larger values make a primitive dominate when it
//! is blended additively with others.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::Field;
use crate::error::FieldError;
use crate::primitives::{sdf_capsule, sdf_sphere_at, sdf_tapered_capsule};
use crate::types::Aabb;

/// Sphere around `center`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereField {
    /// Sphere center
    pub center: Vec3,
    /// Sphere radius
    pub radius: f32,
    /// Distance multiplier
    pub strength: f32,
}

impl SphereField {
    /// Create a sphere field
    pub fn new(center: Vec3, radius: f32, strength: f32) -> Self {
        SphereField { center, radius, strength }
    }
}

impl Field<f32> for SphereField {
    #[inline]
    fn evaluate(&self, point: Vec3) -> f32 {
        sdf_sphere_at(point, self.center, self.radius) * self.strength
    }

    fn domain(&self) -> Aabb {
        Aabb::from_center_extents(self.center, Vec3::splat(self.radius))
    }
}

/// Constant-radius line segment (capsule)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineField {
    /// Segment start
    pub start: Vec3,
    /// Segment end
    pub end: Vec3,
    /// Radius around the segment
    pub radius: f32,
    /// Distance multiplier
    pub strength: f32,
}

impl LineField {
    /// Create a line field
    pub fn new(start: Vec3, end: Vec3, radius: f32, strength: f32) -> Self {
        LineField { start, end, radius, strength }
    }
}

impl Field<f32> for LineField {
    #[inline]
    fn evaluate(&self, point: Vec3) -> f32 {
        sdf_capsule(point, self.start, self.end, self.radius) * self.strength
    }

    fn domain(&self) -> Aabb {
        Aabb::from_points([self.start, self.end]).expand(self.radius)
    }
}

/// Control point of a [`VaryingThicknessLine`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    /// Position of the control point
    pub point: Vec3,
    /// Thickness at this point
    pub radius: f32,
}

/// Polyline whose thickness blends linearly between control points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaryingThicknessLine {
    points: Vec<LinePoint>,
    strength: f32,
}

impl VaryingThicknessLine {
    /// Build from at least two control points
    pub fn new(points: Vec<LinePoint>, strength: f32) -> Result<Self, FieldError> {
        if points.len() < 2 {
            return Err(FieldError::TooFewPoints {
                required: 2,
                actual: points.len(),
            });
        }
        Ok(VaryingThicknessLine { points, strength })
    }

    /// Control points
    pub fn points(&self) -> &[LinePoint] {
        &self.points
    }
}

impl Field<f32> for VaryingThicknessLine {
    fn evaluate(&self, point: Vec3) -> f32 {
        let d = self
            .points
            .windows(2)
            .map(|w| sdf_tapered_capsule(point, w[0].point, w[1].point, w[0].radius, w[1].radius))
            .fold(f32::INFINITY, f32::min);
        d * self.strength
    }

    fn domain(&self) -> Aabb {
        self.points
            .iter()
            .map(|p| Aabb::from_center_extents(p.point, Vec3::splat(p.radius)))
            .fold(Aabb::EMPTY, |acc, b| acc.union(&b))
    }
}
