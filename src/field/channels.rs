//! Named field sets
//!
//! A [`FieldChannels`] bundles one geometry field (the `"Position"` channel)
//! with any number of named attribute fields of 1, 2 or 3 components. The
//! canvas marches the position channel; the remaining channels are sampled
//! at the welded vertices of the extracted mesh.

use std::collections::BTreeMap;

use glam::{Vec2, Vec3};

use super::{MirrorField, SharedField, SubtractField, SumField};
use crate::error::FieldError;
use crate::types::{Aabb, Axis};

/// Name of the channel holding the geometry field
pub const POSITION_ATTRIBUTE: &str = "Position";

/// Conventional name of an RGB color channel
pub const COLOR_ATTRIBUTE: &str = "Color";

/// A set of named fields sharing one domain
#[derive(Clone)]
pub struct FieldChannels {
    domain: Aabb,
    float1: BTreeMap<String, SharedField<f32>>,
    float2: BTreeMap<String, SharedField<Vec2>>,
    float3: BTreeMap<String, SharedField<Vec3>>,
}

impl FieldChannels {
    /// Empty set covering `domain`
    pub fn new(domain: Aabb) -> Self {
        FieldChannels {
            domain,
            float1: BTreeMap::new(),
            float2: BTreeMap::new(),
            float3: BTreeMap::new(),
        }
    }

    /// Set whose only channel is the given geometry field
    pub fn from_position(position: SharedField) -> Self {
        let domain = position.domain();
        FieldChannels::new(domain).with_float1(POSITION_ATTRIBUTE, position)
    }

    /// Add or replace a scalar channel
    pub fn with_float1(mut self, name: impl Into<String>, field: SharedField<f32>) -> Self {
        self.float1.insert(name.into(), field);
        self
    }

    /// Add or replace a two-component channel
    pub fn with_float2(mut self, name: impl Into<String>, field: SharedField<Vec2>) -> Self {
        self.float2.insert(name.into(), field);
        self
    }

    /// Add or replace a three-component channel
    pub fn with_float3(mut self, name: impl Into<String>, field: SharedField<Vec3>) -> Self {
        self.float3.insert(name.into(), field);
        self
    }

    /// Shared domain of the set
    pub fn domain(&self) -> Aabb {
        self.domain
    }

    /// The geometry channel
    pub fn position(&self) -> Result<&SharedField, FieldError> {
        self.float1
            .get(POSITION_ATTRIBUTE)
            .ok_or_else(|| FieldError::MissingChannel(POSITION_ATTRIBUTE.to_string()))
    }

    /// Scalar channels by name
    pub fn float1(&self) -> &BTreeMap<String, SharedField<f32>> {
        &self.float1
    }

    /// Two-component channels by name
    pub fn float2(&self) -> &BTreeMap<String, SharedField<Vec2>> {
        &self.float2
    }

    /// Three-component channels by name
    pub fn float3(&self) -> &BTreeMap<String, SharedField<Vec3>> {
        &self.float3
    }

    /// Scalar attribute channels, excluding the geometry channel
    pub fn attributes1(&self) -> impl Iterator<Item = (&String, &SharedField<f32>)> {
        self.float1.iter().filter(|(name, _)| name.as_str() != POSITION_ATTRIBUTE)
    }

    /// Additively combine several sets
    ///
    /// Channels with the same name are summed; a channel present in only
    /// some sets is summed over those. The domain is the bounding union.
    pub fn combine<'a>(sets: impl IntoIterator<Item = &'a FieldChannels>) -> FieldChannels {
        let mut domain = Aabb::EMPTY;
        let mut float1: BTreeMap<String, Vec<SharedField<f32>>> = BTreeMap::new();
        let mut float2: BTreeMap<String, Vec<SharedField<Vec2>>> = BTreeMap::new();
        let mut float3: BTreeMap<String, Vec<SharedField<Vec3>>> = BTreeMap::new();

        for set in sets {
            domain = domain.union(&set.domain);
            gather(&mut float1, &set.float1);
            gather(&mut float2, &set.float2);
            gather(&mut float3, &set.float3);
        }

        FieldChannels {
            domain,
            float1: sum_each(float1),
            float2: sum_each(float2),
            float3: sum_each(float3),
        }
    }

    /// Carve `other`'s geometry out of this set
    ///
    /// Only the position channel changes; attribute channels and the
    /// domain are kept from `self`.
    pub fn subtract(&self, other: &FieldChannels) -> Result<FieldChannels, FieldError> {
        let carved = SubtractField::new(self.position()?.clone(), other.position()?.clone());
        let mut out = self.clone();
        out.float1
            .insert(POSITION_ATTRIBUTE.to_string(), std::sync::Arc::new(carved));
        Ok(out)
    }

    /// Mirror every channel across the plane `axis = 0`
    pub fn mirror(&self, axis: Axis) -> FieldChannels {
        FieldChannels {
            domain: self.domain.union(&self.domain.reflect(axis)),
            float1: mirror_each(&self.float1, axis),
            float2: mirror_each(&self.float2, axis),
            float3: mirror_each(&self.float3, axis),
        }
    }
}

fn gather<T>(into: &mut BTreeMap<String, Vec<SharedField<T>>>, from: &BTreeMap<String, SharedField<T>>) {
    for (name, field) in from {
        into.entry(name.clone()).or_default().push(field.clone());
    }
}

fn sum_each<T>(groups: BTreeMap<String, Vec<SharedField<T>>>) -> BTreeMap<String, SharedField<T>>
where
    T: std::ops::Add<Output = T> + Default + 'static,
{
    groups
        .into_iter()
        .map(|(name, mut fields)| {
            let field: SharedField<T> = if fields.len() == 1 {
                fields.remove(0)
            } else {
                std::sync::Arc::new(SumField::new(fields))
            };
            (name, field)
        })
        .collect()
}

fn mirror_each<T: 'static>(
    channels: &BTreeMap<String, SharedField<T>>,
    axis: Axis,
) -> BTreeMap<String, SharedField<T>> {
    channels
        .iter()
        .map(|(name, field)| {
            let mirrored: SharedField<T> = std::sync::Arc::new(MirrorField::new(field.clone(), axis));
            (name.clone(), mirrored)
        })
        .collect()
}

impl std::fmt::Debug for FieldChannels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldChannels")
            .field("domain", &self.domain)
            .field("float1", &self.float1.keys().collect::<Vec<_>>())
            .field("float2", &self.float2.keys().collect::<Vec<_>>())
            .field("float3", &self.float3.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Field, FieldExt, FnField, SphereField};

    fn ball(center: Vec3, color: Vec3) -> FieldChannels {
        let sphere = SphereField::new(center, 2.0, 1.0);
        FieldChannels::from_position(sphere.shared())
            .with_float3(COLOR_ATTRIBUTE, FnField::new(sphere.domain(), move |_: Vec3| color).shared())
    }

    #[test]
    fn test_missing_position() {
        let set = FieldChannels::new(Aabb::EMPTY);
        assert_eq!(
            set.position().err(),
            Some(FieldError::MissingChannel("Position".to_string()))
        );
    }

    #[test]
    fn test_combine_sums_matching_channels() {
        let a = ball(Vec3::ZERO, Vec3::X);
        let b = ball(Vec3::new(3.0, 0.0, 0.0), Vec3::Y);
        let c = FieldChannels::combine([&a, &b]);

        let p = Vec3::new(1.0, 0.5, 0.0);
        let expected = a.position().unwrap().evaluate(p) + b.position().unwrap().evaluate(p);
        assert!((c.position().unwrap().evaluate(p) - expected).abs() < 1e-5);
        assert_eq!(c.float3()[COLOR_ATTRIBUTE].evaluate(p), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(c.domain(), a.domain().union(&b.domain()));
    }

    #[test]
    fn test_combine_keeps_unique_channels() {
        let a = ball(Vec3::ZERO, Vec3::X);
        let b = FieldChannels::from_position(SphereField::new(Vec3::ONE, 1.0, 1.0).shared());
        let c = FieldChannels::combine([&a, &b]);
        assert_eq!(c.float3()[COLOR_ATTRIBUTE].evaluate(Vec3::ZERO), Vec3::X);
    }

    #[test]
    fn test_subtract_only_changes_position() {
        let a = ball(Vec3::ZERO, Vec3::X);
        let b = ball(Vec3::new(2.0, 0.0, 0.0), Vec3::Y);
        let s = a.subtract(&b).unwrap();

        let p = Vec3::new(1.5, 0.0, 0.0);
        let pa = a.position().unwrap().evaluate(p);
        let pb = b.position().unwrap().evaluate(p);
        assert_eq!(s.position().unwrap().evaluate(p), pa.max(-pb));
        assert_eq!(s.float3()[COLOR_ATTRIBUTE].evaluate(p), Vec3::X);
        assert_eq!(s.domain(), a.domain());
    }

    #[test]
    fn test_subtract_requires_position() {
        let a = ball(Vec3::ZERO, Vec3::X);
        let empty = FieldChannels::new(Aabb::EMPTY);
        assert!(a.subtract(&empty).is_err());
    }

    #[test]
    fn test_mirror_applies_to_all_channels() {
        let grad = FnField::new(Aabb::EMPTY, |p: Vec3| p.x);
        let set = ball(Vec3::new(3.0, 0.0, 0.0), Vec3::Z).with_float1("Heat", grad.shared());
        let m = set.mirror(Axis::X);

        let p = Vec3::new(-3.0, 0.0, 0.0);
        assert_eq!(
            m.position().unwrap().evaluate(p),
            set.position().unwrap().evaluate(-p)
        );
        assert_eq!(m.float1()["Heat"].evaluate(p), 3.0);
        assert_eq!(m.attributes1().count(), 1);
        assert!(m.domain().contains(p));
    }
}
