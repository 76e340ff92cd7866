//! Core value types shared by fields, the canvas and the mesher

mod aabb;
mod axis;

pub use aabb::Aabb;
pub use axis::Axis;
