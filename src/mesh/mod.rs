//! Extracted triangle meshes
//!
//! [`Mesh`] is the indexed triangle list produced by marching a canvas:
//! welded positions, planar `(x, z)` UVs, and optional per-vertex attribute
//! channels sampled from a [`FieldChannels`](crate::field::FieldChannels) set.
//!
//! Callers with their own mesh container implement [`FromTriangleBuffers`]
//! and extract straight into it with
//! [`Canvas::march_into`](crate::canvas::Canvas::march_into).

mod weld;

pub use weld::{WeldMap, WELD_DECIMALS};

use std::collections::BTreeMap;

use glam::{Vec2, Vec3};

use crate::types::Aabb;

/// Mesh container that can be built from raw extraction buffers
///
/// `indices.len()` is always a multiple of 3 and every index is in range
/// for `positions`. `uvs` has one entry per position.
pub trait FromTriangleBuffers {
    /// Build from welded buffers
    fn from_triangle_buffers(indices: Vec<u32>, positions: Vec<Vec3>, uvs: Vec<Vec2>) -> Self;
}

/// Indexed triangle mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Triangle indices, three per face
    pub indices: Vec<u32>,
    /// Welded vertex positions
    pub positions: Vec<Vec3>,
    /// Per-vertex UVs, the `(x, z)` of each position
    pub uvs: Vec<Vec2>,
    /// Scalar vertex attributes by name
    pub float1: BTreeMap<String, Vec<f32>>,
    /// Two-component vertex attributes by name
    pub float2: BTreeMap<String, Vec<Vec2>>,
    /// Three-component vertex attributes by name
    pub float3: BTreeMap<String, Vec<Vec3>>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when there are no triangles
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate faces as position triples
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            [
                self.positions[t[0] as usize],
                self.positions[t[1] as usize],
                self.positions[t[2] as usize],
            ]
        })
    }

    /// Bounding box of all positions, empty for an empty mesh
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter().copied())
    }
}

impl FromTriangleBuffers for Mesh {
    fn from_triangle_buffers(indices: Vec<u32>, positions: Vec<Vec3>, uvs: Vec<Vec2>) -> Self {
        Mesh {
            indices,
            positions,
            uvs,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh::from_triangle_buffers(
            vec![0, 1, 2, 0, 2, 3],
            vec![
                Vec3::ZERO,
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
            vec![Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::ONE, Vec2::new(0.0, 1.0)],
        )
    }

    #[test]
    fn test_counts() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.is_empty());
        assert!(Mesh::new().is_empty());
    }

    #[test]
    fn test_triangles() {
        let mesh = quad();
        let tris: Vec<_> = mesh.triangles().collect();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[1], [Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0)]);
    }

    #[test]
    fn test_bounds() {
        let mesh = quad();
        assert_eq!(mesh.bounds(), Aabb::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0)));
        assert!(Mesh::new().bounds().is_empty());
    }
}
