//! Error types
//!
//! Construction problems are reported here. Extraction itself never fails:
//! once a canvas exists, marching it is infallible.

use thiserror::Error;

use crate::types::Axis;

/// Canvas construction and cell access errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// A grid dimension was negative
    #[error("invalid canvas {axis} dimension: {value}")]
    NegativeDimension {
        /// Axis the dimension belongs to
        axis: Axis,
        /// Value supplied by the caller
        value: i64,
    },

    /// The grid has more cells than a buffer can hold
    #[error("canvas {width}x{height}x{depth} is too large")]
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Requested depth
        depth: usize,
    },

    /// Cubes-per-unit must be finite and strictly positive
    #[error("invalid cubes per unit: {0}")]
    InvalidResolution(f32),

    /// Cell coordinate outside the grid
    #[error("cell ({x}, {y}, {z}) is outside a {width}x{height}x{depth} canvas")]
    OutOfBounds {
        /// Cell x
        x: usize,
        /// Cell y
        y: usize,
        /// Cell z
        z: usize,
        /// Canvas width
        width: usize,
        /// Canvas height
        height: usize,
        /// Canvas depth
        depth: usize,
    },
}

/// Field construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// A field set has no channel with this name
    #[error("field has no \"{0}\" channel")]
    MissingChannel(String),

    /// A polyline field was built from too few points
    #[error("line field requires at least {required} points, got {actual}")]
    TooFewPoints {
        /// Minimum point count
        required: usize,
        /// Point count supplied
        actual: usize,
    },
}

/// Any error produced by this crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Canvas error
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// Field error
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
