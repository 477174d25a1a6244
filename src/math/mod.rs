//! Small vector and plane types used by the clipping engine.

pub mod plane;
pub mod vec3;

pub use plane::Plane;
pub use vec3::{Axis, Vec3};
