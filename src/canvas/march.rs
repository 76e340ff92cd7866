//! Marching Cubes extraction
//!
//! Every unit cell between eight neighbouring grid points is classified
//! against the cutoff (a corner is inside when its value is below it),
//! crossed edges are interpolated, and the resulting triangles are welded
//! into a shared vertex buffer.
//!
//! # Z-slab parallelism
//! Each z-layer of cells is classified independently into a raw triangle
//! list. The lists are welded afterwards on one thread in slab order, so a
//! parallel march produces exactly the same mesh as a serial one.

use glam::{Vec2, Vec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::tables::{CORNER_OFFSETS, EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
use super::Canvas;
use crate::field::{Field, FieldChannels};
use crate::mesh::{FromTriangleBuffers, Mesh, WeldMap, WELD_DECIMALS};

/// Extraction parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarchConfig {
    /// Iso-level separating inside (below) from outside
    pub cutoff: f32,
    /// Decimals kept when welding vertices
    pub weld_decimals: u32,
    /// Classify slabs on rayon workers
    pub parallel: bool,
}

impl Default for MarchConfig {
    fn default() -> Self {
        MarchConfig {
            cutoff: 0.0,
            weld_decimals: WELD_DECIMALS,
            parallel: false,
        }
    }
}

impl MarchConfig {
    /// Default config at the given cutoff
    pub fn with_cutoff(cutoff: f32) -> Self {
        MarchConfig {
            cutoff,
            ..Default::default()
        }
    }
}

impl Canvas {
    /// Extract the iso-surface at `cutoff` on the calling thread
    ///
    /// Does not modify the canvas; repeated calls return identical meshes.
    pub fn march(&self, cutoff: f32) -> Mesh {
        self.march_with(&MarchConfig::with_cutoff(cutoff))
    }

    /// Extract the iso-surface at `cutoff` using rayon workers
    ///
    /// Output is identical to [`march`](Self::march).
    pub fn march_parallel(&self, cutoff: f32) -> Mesh {
        self.march_with(&MarchConfig {
            parallel: true,
            ..MarchConfig::with_cutoff(cutoff)
        })
    }

    /// Extract with explicit parameters
    pub fn march_with(&self, config: &MarchConfig) -> Mesh {
        self.march_into(config)
    }

    /// Extract straight into a caller-provided mesh type
    pub fn march_into<M: FromTriangleBuffers>(&self, config: &MarchConfig) -> M {
        self.weld(config).finish_into()
    }

    /// Extract and sample every attribute channel of `channels` at the welded vertices
    ///
    /// The position channel is not sampled; the geometry comes from the
    /// values already accumulated on the canvas.
    pub fn march_channels(&self, channels: &FieldChannels, config: &MarchConfig) -> Mesh {
        let mut mesh = self.march_with(config);
        let positions = &mesh.positions;

        for (name, field) in channels.attributes1() {
            let values = sample(positions, config.parallel, |p| field.evaluate(p));
            mesh.float1.insert(name.clone(), values);
        }
        for (name, field) in channels.float2() {
            let values: Vec<Vec2> = sample(positions, config.parallel, |p| field.evaluate(p));
            mesh.float2.insert(name.clone(), values);
        }
        for (name, field) in channels.float3() {
            let values: Vec<Vec3> = sample(positions, config.parallel, |p| field.evaluate(p));
            mesh.float3.insert(name.clone(), values);
        }

        debug!(
            float1 = mesh.float1.len(),
            float2 = mesh.float2.len(),
            float3 = mesh.float3.len(),
            "attributes sampled"
        );
        mesh
    }

    fn weld(&self, config: &MarchConfig) -> WeldMap {
        let (width, height, depth) = self.dimensions();
        let slabs = depth.saturating_sub(1);
        let mut weld = WeldMap::new(config.weld_decimals);
        let mut triangles = 0usize;

        if config.parallel {
            let per_slab: Vec<Vec<[Vec3; 3]>> = (0..slabs)
                .into_par_iter()
                .map(|z| {
                    let mut out = Vec::new();
                    self.march_slab(z, config.cutoff, &mut |tri| out.push(tri));
                    trace!(z, triangles = out.len(), "slab extracted");
                    out
                })
                .collect();

            for tri in per_slab.into_iter().flatten() {
                weld.push_triangle(tri);
                triangles += 1;
            }
        } else {
            for z in 0..slabs {
                let mut count = 0usize;
                self.march_slab(z, config.cutoff, &mut |tri| {
                    weld.push_triangle(tri);
                    count += 1;
                });
                trace!(z, triangles = count, "slab extracted");
                triangles += count;
            }
        }

        debug!(
            cells = width.saturating_sub(1) * height.saturating_sub(1) * slabs,
            triangles,
            vertices = weld.vertex_count(),
            welded = weld.merged_count(),
            parallel = config.parallel,
            "canvas marched"
        );
        weld
    }

    /// Classify every cell whose lower corner has the given z
    fn march_slab(&self, z: usize, cutoff: f32, emit: &mut impl FnMut([Vec3; 3])) {
        let (width, height, _) = self.dimensions();
        let values = self.values();

        for y in 0..height.saturating_sub(1) {
            for x in 0..width.saturating_sub(1) {
                let mut corner_values = [0.0f32; 8];
                let mut cube_index = 0usize;
                for (i, [dx, dy, dz]) in CORNER_OFFSETS.iter().enumerate() {
                    let v = values[self.index(x + dx, y + dy, z + dz)];
                    corner_values[i] = v;
                    if v < cutoff {
                        cube_index |= 1 << i;
                    }
                }

                let edges = EDGE_TABLE[cube_index];
                if edges == 0 {
                    continue;
                }

                let mut edge_vertices = [Vec3::ZERO; 12];
                for (e, &[a, b]) in EDGE_CORNERS.iter().enumerate() {
                    if edges & (1 << e) == 0 {
                        continue;
                    }
                    let [ax, ay, az] = CORNER_OFFSETS[a];
                    let [bx, by, bz] = CORNER_OFFSETS[b];
                    edge_vertices[e] = interpolate_vertex(
                        self.world_position(x + ax, y + ay, z + az),
                        self.world_position(x + bx, y + by, z + bz),
                        corner_values[a],
                        corner_values[b],
                        cutoff,
                    );
                }

                for tri in TRI_TABLE[cube_index].chunks_exact(3) {
                    if tri[0] < 0 {
                        break;
                    }
                    let v1 = edge_vertices[tri[0] as usize];
                    let v2 = edge_vertices[tri[1] as usize];
                    let v3 = edge_vertices[tri[2] as usize];
                    emit([v1, v3, v2]);
                }
            }
        }
    }
}

/// Point where the field crosses `cutoff` along the edge `p0..p1`
///
/// Equal endpoint values have no unique crossing; the midpoint is used.
#[inline(always)]
fn interpolate_vertex(p0: Vec3, p1: Vec3, v0: f32, v1: f32, cutoff: f32) -> Vec3 {
    let t = if v0 == v1 { 0.5 } else { (cutoff - v0) / (v1 - v0) };
    p0 + (p1 - p0) * t
}

fn sample<T, F>(positions: &[Vec3], parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(Vec3) -> T + Sync + Send,
{
    if parallel {
        positions.par_iter().map(|&p| f(p)).collect()
    } else {
        positions.iter().map(|&p| f(p)).collect()
    }
}
