//! Domain modifiers
//!
//! Modifiers deform the space before a child field is evaluated.

mod mirror;

pub use mirror::{modifier_mirror_axis, reflect_axis};
