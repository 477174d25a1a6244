//! Axis-aligned boxes and clipping a loop to a box.

use crate::error::ClipError;
use crate::math::{Axis, Vec3};
use crate::vertex_loop::VertexLoop;

use super::half_space::HalfSpace;
use super::Clipper;

/// An axis-aligned box `[x0, x1] x [y0, y1] x [z0, z1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x0: f32,
    pub y0: f32,
    pub z0: f32,
    pub x1: f32,
    pub y1: f32,
    pub z1: f32,
}

impl Aabb {
    /// Builds a box without checking that each min is below its max.
    pub const fn new(x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32) -> Self {
        Self {
            x0,
            y0,
            z0,
            x1,
            y1,
            z1,
        }
    }

    /// Builds a box, failing if any min exceeds its max.
    pub fn try_new(x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32) -> Result<Self, ClipError> {
        let aabb = Self::new(x0, y0, z0, x1, y1, z1);
        for axis in Axis::ALL {
            let (min, max) = (aabb.min(axis), aabb.max(axis));
            if min > max {
                return Err(ClipError::InvertedBox { axis, min, max });
            }
        }
        Ok(aabb)
    }

    pub fn from_corners(min: Vec3, max: Vec3) -> Self {
        Self::new(min.x, min.y, min.z, max.x, max.y, max.z)
    }

    /// Smallest box holding every point, or `None` for no points.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let (lo, hi) = rest
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        Some(Self::from_corners(lo, hi))
    }

    pub fn min(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x0,
            Axis::Y => self.y0,
            Axis::Z => self.z0,
        }
    }

    pub fn max(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x1,
            Axis::Y => self.y1,
            Axis::Z => self.z1,
        }
    }

    pub fn min_corner(&self) -> Vec3 {
        Vec3::new(self.x0, self.y0, self.z0)
    }

    pub fn max_corner(&self) -> Vec3 {
        Vec3::new(self.x1, self.y1, self.z1)
    }

    /// Inclusive point containment.
    pub fn contains(&self, p: Vec3) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| p.get(axis) >= self.min(axis) && p.get(axis) <= self.max(axis))
    }

    /// The six faces as inward-facing half-spaces, in clipping order:
    /// `x >= x0, x <= x1, y >= y0, y <= y1, z >= z0, z <= z1`.
    pub fn half_spaces(&self) -> [HalfSpace; 6] {
        [
            HalfSpace::over(Axis::X, self.x0),
            HalfSpace::under(Axis::X, self.x1),
            HalfSpace::over(Axis::Y, self.y0),
            HalfSpace::under(Axis::Y, self.y1),
            HalfSpace::over(Axis::Z, self.z0),
            HalfSpace::under(Axis::Z, self.z1),
        ]
    }
}

impl Clipper {
    /// Intersects a coplanar loop with a box, boundary inclusive.
    ///
    /// Runs six half-space clips, bouncing between `scratch` and `out`. Stops
    /// at the first face that leaves fewer than three vertices; `out` then
    /// holds whatever that stage left (zero to two vertices) and the result
    /// is `false`. On success `out` holds the clipped polygon. `scratch`
    /// contents are unspecified afterwards.
    pub fn clip_box(
        &self,
        input: &[Vec3],
        aabb: &Aabb,
        scratch: &mut VertexLoop,
        out: &mut VertexLoop,
    ) -> bool {
        for (stage, hs) in aabb.half_spaces().iter().enumerate() {
            let into_scratch = stage % 2 == 0;
            let kept = match (stage, into_scratch) {
                (0, _) => self.clip_half_space(input, hs, scratch),
                (_, true) => self.clip_half_space(out.as_slice(), hs, scratch),
                (_, false) => self.clip_half_space(scratch.as_slice(), hs, out),
            };

            if !kept {
                if into_scratch {
                    out.copy_from(scratch.as_slice());
                }
                log::trace!(
                    "box clip stopped at face {stage} with {} vertices",
                    out.len()
                );
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon;
    use approx::assert_relative_eq;

    fn unit_square() -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_disjoint_box_yields_nothing() {
        let clipper = Clipper::new();
        let (mut scratch, mut out) = (VertexLoop::new(), VertexLoop::new());
        let aabb = Aabb::new(2.0, 2.0, -1.0, 3.0, 3.0, 1.0);

        assert!(!clipper.clip_box(&unit_square(), &aabb, &mut scratch, &mut out));
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn test_enclosing_box_keeps_loop() {
        let clipper = Clipper::new();
        let (mut scratch, mut out) = (VertexLoop::new(), VertexLoop::new());
        let aabb = Aabb::new(-1.0, -1.0, -1.0, 2.0, 2.0, 1.0);

        assert!(clipper.clip_box(&unit_square(), &aabb, &mut scratch, &mut out));
        assert_eq!(out.as_slice(), &unit_square());
    }

    #[test]
    fn test_box_cuts_square_to_rectangle() {
        let clipper = Clipper::new();
        let (mut scratch, mut out) = (VertexLoop::new(), VertexLoop::new());
        let aabb = Aabb::new(0.25, -1.0, -1.0, 0.75, 0.5, 1.0);

        assert!(clipper.clip_box(&unit_square(), &aabb, &mut scratch, &mut out));
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|&p| aabb.contains(p)));
        assert_relative_eq!(polygon::area(out.as_slice()), 0.25, epsilon = 1e-6);

        let bounds = Aabb::from_points(out.as_slice()).unwrap();
        assert_eq!(bounds, Aabb::new(0.25, 0.0, 0.0, 0.75, 0.5, 0.0));
    }

    #[test]
    fn test_tilted_triangle_in_box() {
        let clipper = Clipper::new();
        let (mut scratch, mut out) = (VertexLoop::new(), VertexLoop::new());
        // Triangle on the plane x + y + z = 1.5, larger than the unit cube.
        let tri = [
            Vec3::new(1.5, 0.0, 0.0),
            Vec3::new(0.0, 1.5, 0.0),
            Vec3::new(0.0, 0.0, 1.5),
        ];
        let cube = Aabb::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);

        assert!(clipper.clip_box(&tri, &cube, &mut scratch, &mut out));
        // Every corner of the triangle is cut off: a hexagon.
        assert_eq!(out.len(), 6);
        for p in out.iter() {
            assert!(cube.contains(*p));
            assert_relative_eq!(p.x + p.y + p.z, 1.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_zero_thickness_box_keeps_coplanar_loop() {
        let clipper = Clipper::new();
        let (mut scratch, mut out) = (VertexLoop::new(), VertexLoop::new());
        let slab = Aabb::new(-5.0, -5.0, 0.0, 5.0, 5.0, 0.0);

        assert!(clipper.clip_box(&unit_square(), &slab, &mut scratch, &mut out));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_short_circuit_reports_survivors_in_out() {
        let clipper = Clipper::new();
        let (mut scratch, mut out) = (VertexLoop::new(), VertexLoop::new());
        // Only the top edge of the square touches y >= 1.
        let aabb = Aabb::new(-1.0, 1.0, -1.0, 2.0, 2.0, 1.0);

        assert!(!clipper.clip_box(&unit_square(), &aabb, &mut scratch, &mut out));
        assert_eq!(
            out.as_slice(),
            &[Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0)]
        );
    }

    #[test]
    fn test_try_new_rejects_inverted() {
        assert!(Aabb::try_new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).is_ok());
        assert_eq!(
            Aabb::try_new(0.0, 2.0, 0.0, 1.0, 1.0, 1.0),
            Err(ClipError::InvertedBox {
                axis: Axis::Y,
                min: 2.0,
                max: 1.0
            })
        );
    }

    #[test]
    fn test_from_points_and_contains() {
        assert_eq!(Aabb::from_points(&[]), None);
        let aabb = Aabb::from_points(&[Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, 0.0)]).unwrap();
        assert_eq!(aabb.min_corner(), Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max_corner(), Vec3::new(1.0, 2.0, 3.0));
        assert!(aabb.contains(Vec3::new(1.0, 2.0, 3.0)));
        assert!(!aabb.contains(Vec3::new(1.0, 2.0, 3.5)));
    }
}
