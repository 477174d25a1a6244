//! Clipping and splitting of coplanar vertex loops.
//!
//! Every operation walks the loop once as a cyclic list of edges
//! (Sutherland-Hodgman) and writes into caller-owned buffers:
//!
//! - [`clip`]: keep the part of a loop inside one half-space.
//! - [`split`]: partition a loop into the pieces on either side of a plane.
//! - [`aabb`]: intersect a loop with an axis-aligned box by chaining six
//!   half-space clips.
//! - [`flat`]: the same box clip on `[f64; 3]` arrays, compacted in place.
//!
//! Inputs must be coplanar; nothing checks this. Results for non-planar or
//! self-intersecting loops are meaningless but never panic.

pub mod aabb;
pub mod clip;
pub mod flat;
pub mod half_space;
pub mod split;

pub use aabb::Aabb;
pub use half_space::{Facing, HalfSpace};
pub use split::{Boundary, Side};

use crate::tolerance::Tolerance;

/// Entry point for clip and split operations.
///
/// Holds nothing but the tolerances used to decide whether a vertex lies on
/// a cutting plane, so one instance can be shared freely across threads.
/// Scratch buffers belong to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clipper {
    tolerance: Tolerance,
    flat_tolerance: Tolerance,
}

impl Clipper {
    pub fn new() -> Self {
        Self {
            tolerance: Tolerance::F32,
            flat_tolerance: Tolerance::F64,
        }
    }

    /// Uses `tolerance` for [`crate::Vec3`] loops.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Uses `tolerance` for `[f64; 3]` loops.
    pub fn with_flat_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.flat_tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    pub fn flat_tolerance(&self) -> &Tolerance {
        &self.flat_tolerance
    }
}

impl Default for Clipper {
    fn default() -> Self {
        Self::new()
    }
}
