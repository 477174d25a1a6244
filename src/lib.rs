//! Clipping and splitting of planar polygons against half-spaces and boxes.
//!
//! Polygons are closed, coplanar vertex loops. The engine clips a loop to one
//! side of a plane, splits it into the pieces on both sides, or intersects it
//! with an axis-aligned box. Results are written into caller-owned
//! [`VertexLoop`] buffers that can be reused across calls without allocating.
//!
//! # Quick Start
//!
//! ```
//! use loopclip::prelude::*;
//!
//! let square = [
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(1.0, 1.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! ];
//!
//! let clipper = Clipper::new();
//! let mut out = VertexLoop::new();
//!
//! // Keep x >= 0.5.
//! assert!(clipper.clip(&square, &Plane::new(1.0, 0.0, 0.0, -0.5), &mut out));
//! assert_eq!(out.len(), 4);
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod error;
pub mod math;
pub mod polygon;
pub mod tolerance;
pub mod vertex_loop;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{Aabb, Boundary, Clipper, Facing, HalfSpace, Side};
pub use error::ClipError;
pub use math::{Axis, Plane, Vec3};
pub use tolerance::Tolerance;
pub use vertex_loop::VertexLoop;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use loopclip::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{Aabb, Boundary, Clipper, Facing, HalfSpace, Side};

    // Buffers
    pub use crate::vertex_loop::VertexLoop;

    // Math
    pub use crate::math::{Axis, Plane, Vec3};
    pub use crate::tolerance::Tolerance;
}
