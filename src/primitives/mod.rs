//! Primitive SDF functions
//!
//! Free functions computing signed distances for the shapes the field
//! constructors in [`crate::field`] are built from.
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: All functions use `#[inline(always)]`.

mod capsule;
mod sphere;

pub use capsule::{sdf_capsule, sdf_tapered_capsule};
pub use sphere::sdf_sphere_at;
