//! Field value combinators
//!
//! Pointwise operations used by the composite fields in [`crate::field`].
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: All scalar functions use `#[inline(always)]`.

mod csg;
mod sum;

pub use csg::{sdf_subtraction, sdf_union};
pub use sum::field_sum;
