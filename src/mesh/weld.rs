//! Vertex welding
//!
//! Marching Cubes emits every triangle with its own three vertices. Welding
//! merges vertices whose coordinates agree after rounding to a fixed number
//! of decimals, so neighbouring triangles share indices.
//!
//! Rounding is a trade-off: with too few decimals distinct nearby vertices
//! collapse, with too many near-identical ones fail to merge. Shared cell
//! edges interpolate bit-identical vertices, so the default only has to
//! absorb noise from the field itself.

use std::collections::HashMap;

use glam::{Vec2, Vec3};

use super::{FromTriangleBuffers, Mesh};

/// Default number of decimals kept when welding
pub const WELD_DECIMALS: u32 = 4;

type VertexKey = (i64, i64, i64);

/// Position-keyed vertex deduplication for a single extraction
#[derive(Debug, Clone)]
pub struct WeldMap {
    scale: f64,
    lookup: HashMap<VertexKey, u32>,
    positions: Vec<Vec3>,
    uvs: Vec<Vec2>,
    indices: Vec<u32>,
    merged: usize,
}

impl WeldMap {
    /// Empty map rounding to `decimals` places
    pub fn new(decimals: u32) -> Self {
        WeldMap {
            scale: 10f64.powi(decimals as i32),
            lookup: HashMap::new(),
            positions: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
            merged: 0,
        }
    }

    #[inline]
    fn key(&self, p: Vec3) -> VertexKey {
        let q = |c: f32| (c as f64 * self.scale).round() as i64;
        (q(p.x), q(p.y), q(p.z))
    }

    /// Index of the welded vertex at `p`, appending it on first sight
    pub fn lookup_or_add(&mut self, p: Vec3) -> u32 {
        let key = self.key(p);
        if let Some(&idx) = self.lookup.get(&key) {
            self.merged += 1;
            return idx;
        }
        let idx = self.positions.len() as u32;
        self.lookup.insert(key, idx);
        self.positions.push(p);
        self.uvs.push(Vec2::new(p.x, p.z));
        idx
    }

    /// Weld and append one triangle
    #[inline]
    pub fn push_triangle(&mut self, tri: [Vec3; 3]) {
        for p in tri {
            let idx = self.lookup_or_add(p);
            self.indices.push(idx);
        }
    }

    /// Distinct vertices so far
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Vertices that reused an existing index
    pub fn merged_count(&self) -> usize {
        self.merged
    }

    /// Hand the buffers to any mesh container
    pub fn finish_into<M: FromTriangleBuffers>(self) -> M {
        M::from_triangle_buffers(self.indices, self.positions, self.uvs)
    }

    /// Build a [`Mesh`] without attributes
    pub fn finish(self) -> Mesh {
        self.finish_into()
    }
}

impl Default for WeldMap {
    fn default() -> Self {
        WeldMap::new(WELD_DECIMALS)
    }
}
