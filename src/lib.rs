//! # sdf-canvas
//!
//! Build shapes as continuous fields, draw them onto a dense voxel canvas,
//! and extract the surface as a welded triangle mesh with Marching Cubes.
//!
//! ## Features
//!
//! - **Fields**: Sphere, Line, VaryingThicknessLine, closures
//! - **Algebra**: Sum, Union, Subtract, Mirror over shared `Arc` children
//! - **Channels**: named attribute fields (color, etc.) sampled onto the mesh
//! - **Canvas**: additive accumulation, serial or parallel by z-slab
//! - **Extraction**: Marching Cubes with deterministic vertex welding
//!
//! ## Example
//!
//! ```rust
//! use sdf_canvas::prelude::*;
//!
//! // A sphere of radius 5 in the middle of a 20^3 canvas
//! let sphere = SphereField::new(Vec3::splat(10.0), 5.0, 1.0);
//!
//! let mut canvas = Canvas::new(20, 20, 20, 1.0).unwrap();
//! canvas.add_field_parallel(&sphere);
//!
//! let mesh = canvas.march(0.0);
//! assert!(mesh.triangle_count() > 0);
//! assert_eq!(mesh, canvas.march_parallel(0.0));
//! ```

#![warn(missing_docs)]

pub mod canvas;
pub mod error;
pub mod field;
pub mod mesh;
pub mod modifiers;
pub mod operations;
pub mod primitives;
pub mod types;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::canvas::{Canvas, CanvasConfig, MarchConfig};
    pub use crate::error::{CanvasError, Error, FieldError, Result};
    pub use crate::field::{
        Field, FieldChannels, FieldExt, FnField, LineField, LinePoint, MirrorField,
        ScalarFieldExt, SharedField, SphereField, SubtractField, SumField, UnionField,
        VaryingThicknessLine, COLOR_ATTRIBUTE, FAR_OUTSIDE, POSITION_ATTRIBUTE,
    };
    pub use crate::mesh::{FromTriangleBuffers, Mesh, WELD_DECIMALS};
    pub use crate::types::{Aabb, Axis};
    pub use glam::{Vec2, Vec3};
}

// Re-exports for convenience
pub use canvas::{Canvas, CanvasConfig, MarchConfig};
pub use error::{Error, Result};
pub use field::{Field, FieldChannels};
pub use mesh::Mesh;
