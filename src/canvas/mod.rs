//! Dense scalar grid that fields are accumulated into
//!
//! A [`Canvas`] stores one `f32` per grid point, laid out x-fastest then y
//! then z (`index = z * width * height + y * width + x`). Grid point
//! `(x, y, z)` sits at world position `(x, y, z) / cubes_per_unit`.
//!
//! Fields are *added* to the canvas, so several shapes drawn onto the same
//! canvas blend additively. Once filled, [`Canvas::march`] extracts the
//! iso-surface as a welded triangle mesh.
//!
//! # Parallelism
//!
//! The `*_parallel` variants split the grid into contiguous z-slabs and hand
//! them to rayon. Every grid point still receives exactly one addition per
//! call, so the result does not depend on the worker count.

mod march;
mod tables;

pub use march::MarchConfig;

use glam::Vec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CanvasError, FieldError};
use crate::field::{Field, FieldChannels};
use crate::types::{Aabb, Axis};

/// Canvas construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Grid points along x
    pub width: i64,
    /// Grid points along y
    pub height: i64,
    /// Grid points along z
    pub depth: i64,
    /// Grid points per world unit
    pub cubes_per_unit: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            width: 32,
            height: 32,
            depth: 32,
            cubes_per_unit: 1.0,
        }
    }
}

/// Dense 3D grid of accumulated field values
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    data: Vec<f32>,
    width: usize,
    height: usize,
    depth: usize,
    cubes_per_unit: f32,
}

impl Canvas {
    /// Create a zero-filled canvas
    ///
    /// Fails on a negative dimension, a cell count too large to allocate,
    /// or a `cubes_per_unit` that is not finite and strictly positive. Zero-sized canvases are allowed and
    /// march to an empty mesh.
    pub fn new(width: i64, height: i64, depth: i64, cubes_per_unit: f32) -> Result<Self, CanvasError> {
        let width = checked_dimension(Axis::X, width)?;
        let height = checked_dimension(Axis::Y, height)?;
        let depth = checked_dimension(Axis::Z, depth)?;
        let len = checked_len(width, height, depth)?;
        if !cubes_per_unit.is_finite() || cubes_per_unit <= 0.0 {
            return Err(CanvasError::InvalidResolution(cubes_per_unit));
        }

        debug!(width, height, depth, cubes_per_unit, "canvas created");

        Ok(Canvas {
            data: vec![0.0; len],
            width,
            height,
            depth,
            cubes_per_unit,
        })
    }

    /// Create a canvas from a config
    pub fn from_config(config: &CanvasConfig) -> Result<Self, CanvasError> {
        Canvas::new(config.width, config.height, config.depth, config.cubes_per_unit)
    }

    /// `(width, height, depth)` in grid points
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }

    /// Grid points per world unit
    pub fn cubes_per_unit(&self) -> f32 {
        self.cubes_per_unit
    }

    /// Raw values in x-fastest order
    pub fn values(&self) -> &[f32] {
        &self.data
    }

    /// World position of grid point `(x, y, z)`
    #[inline]
    pub fn world_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
        Vec3::new(x as f32, y as f32, z as f32) * (1.0 / self.cubes_per_unit)
    }

    /// World-space box spanned by the grid points, empty for a zero-sized canvas
    pub fn bounds(&self) -> Aabb {
        if self.data.is_empty() {
            return Aabb::EMPTY;
        }
        Aabb::new(
            self.world_position(0, 0, 0),
            self.world_position(self.width - 1, self.height - 1, self.depth - 1),
        )
    }

    #[inline]
    pub(crate) fn index(&self, x: usize, y: usize, z: usize) -> usize {
        z * self.width * self.height + y * self.width + x
    }

    fn checked_index(&self, x: usize, y: usize, z: usize) -> Result<usize, CanvasError> {
        if x < self.width && y < self.height && z < self.depth {
            Ok(self.index(x, y, z))
        } else {
            Err(CanvasError::OutOfBounds {
                x,
                y,
                z,
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }

    /// Value at grid point `(x, y, z)`
    pub fn value(&self, x: usize, y: usize, z: usize) -> Result<f32, CanvasError> {
        self.checked_index(x, y, z).map(|i| self.data[i])
    }

    /// Overwrite the value at grid point `(x, y, z)`
    pub fn set_value(&mut self, x: usize, y: usize, z: usize, value: f32) -> Result<(), CanvasError> {
        let i = self.checked_index(x, y, z)?;
        self.data[i] = value;
        Ok(())
    }

    /// Add to the value at grid point `(x, y, z)`
    pub fn add_value(&mut self, x: usize, y: usize, z: usize, value: f32) -> Result<(), CanvasError> {
        let i = self.checked_index(x, y, z)?;
        self.data[i] += value;
        Ok(())
    }

    /// Reset every value to zero
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Add `field` sampled at every grid point
    pub fn add_field<F: Field<f32> + ?Sized>(&mut self, field: &F) {
        let scale = 1.0 / self.cubes_per_unit;
        let (width, height) = (self.width, self.height);
        let mut i = 0;
        for z in 0..self.depth {
            for y in 0..height {
                for x in 0..width {
                    let p = Vec3::new(x as f32, y as f32, z as f32) * scale;
                    self.data[i] += field.evaluate(p);
                    i += 1;
                }
            }
        }
        debug!(points = self.data.len(), "field accumulated");
    }

    /// [`add_field`](Self::add_field) spread over rayon workers by z-slab
    pub fn add_field_parallel<F: Field<f32> + ?Sized>(&mut self, field: &F) {
        if self.data.is_empty() {
            return;
        }
        let scale = 1.0 / self.cubes_per_unit;
        let (width, height) = (self.width, self.height);

        self.data
            .par_chunks_mut(width * height)
            .enumerate()
            .for_each(|(z, slab)| {
                for y in 0..height {
                    let row = &mut slab[y * width..(y + 1) * width];
                    for (x, v) in row.iter_mut().enumerate() {
                        let p = Vec3::new(x as f32, y as f32, z as f32) * scale;
                        *v += field.evaluate(p);
                    }
                }
            });
        debug!(points = self.data.len(), slabs = self.depth, "field accumulated in parallel");
    }

    /// Add the position channel of `channels`
    pub fn add_channels(&mut self, channels: &FieldChannels) -> Result<(), FieldError> {
        let position = channels.position()?;
        self.add_field(position);
        Ok(())
    }

    /// Parallel [`add_channels`](Self::add_channels)
    pub fn add_channels_parallel(&mut self, channels: &FieldChannels) -> Result<(), FieldError> {
        let position = channels.position()?;
        self.add_field_parallel(position);
        Ok(())
    }
}

fn checked_dimension(axis: Axis, value: i64) -> Result<usize, CanvasError> {
    usize::try_from(value).map_err(|_| CanvasError::NegativeDimension { axis, value })
}

// Vec allocations are capped at isize::MAX bytes.
fn checked_len(width: usize, height: usize, depth: usize) -> Result<usize, CanvasError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(depth))
        .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<f32>())
        .ok_or(CanvasError::TooLarge { width, height, depth })
}
