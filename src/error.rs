//! Error types for building clipping primitives.

use thiserror::Error;

use crate::math::Axis;

/// Errors raised while classifying planes or building boxes.
///
/// Clip and split operations themselves never fail; degenerate geometry is
/// reported through their return values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// Plane normal is the zero vector, so it has no sides.
    #[error("degenerate plane: normal ({a}, {b}, {c}) is zero")]
    DegeneratePlane { a: f32, b: f32, c: f32 },

    /// Box minimum exceeds its maximum along an axis.
    #[error("inverted box along {axis:?}: min {min} > max {max}")]
    InvertedBox { axis: Axis, min: f32, max: f32 },
}
