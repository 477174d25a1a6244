//! Clipping a coplanar loop against a single half-space.
//!
//! Sutherland-Hodgman over the cyclic edge list `(last, first), (first, second), ...`.
//! Each vertex is measured once; the measurement of an edge's end becomes the
//! start of the next edge. Vertices within tolerance of the boundary count as
//! kept, so a loop touching the plane keeps its contact vertices.

use crate::math::{Axis, Plane, Vec3};
use crate::vertex_loop::VertexLoop;

use super::half_space::{Class, HalfSpace};
use super::Clipper;

impl Clipper {
    /// Clips `input` against the non-negative side of `plane`.
    ///
    /// Planes whose normal lies along a single axis are routed to the
    /// axis-aligned fast path; anything else goes through [`Clipper::clip_general`].
    /// A plane with a zero normal clears `out` and returns `false`.
    ///
    /// `input` must be coplanar; this is not checked. Returns true iff `out`
    /// holds at least three vertices.
    pub fn clip(&self, input: &[Vec3], plane: &Plane, out: &mut VertexLoop) -> bool {
        match HalfSpace::from_plane(plane) {
            Ok(hs) => self.clip_half_space(input, &hs, out),
            Err(err) => {
                log::debug!("clip skipped: {err}");
                out.clear();
                false
            }
        }
    }

    /// Clips `input` against a half-space, keeping its positive side.
    pub fn clip_half_space(&self, input: &[Vec3], hs: &HalfSpace, out: &mut VertexLoop) -> bool {
        out.clear();
        let Some(&last) = input.last() else {
            return false;
        };
        out.ensure_capacity(input.len() * 3 / 2);

        let mut va = last;
        let mut a = hs.measure(va, &self.tolerance);

        for &vb in input {
            let b = hs.measure(vb, &self.tolerance);

            match (a.class, b.class) {
                (Class::Below, Class::Above) => {
                    out.push(hs.crossing(va, a.dist, vb, b.dist));
                    out.push(vb);
                }
                (Class::Below, Class::On) => out.push(vb),
                (Class::Below, Class::Below) => {}
                (Class::Above, Class::Below) => out.push(hs.crossing(va, a.dist, vb, b.dist)),
                (Class::Above, _) => out.push(vb),
                // `va` was emitted by the previous edge if it was kept at all.
                (Class::On, Class::Below) => {}
                (Class::On, _) => out.push(vb),
            }

            va = vb;
            a = b;
        }

        out.is_polygon()
    }

    /// Keeps the part of `input` with `coord >= min` along `axis`.
    pub fn clip_over_axis(&self, input: &[Vec3], axis: Axis, min: f32, out: &mut VertexLoop) -> bool {
        self.clip_half_space(input, &HalfSpace::over(axis, min), out)
    }

    /// Keeps the part of `input` with `coord <= max` along `axis`.
    pub fn clip_under_axis(&self, input: &[Vec3], axis: Axis, max: f32, out: &mut VertexLoop) -> bool {
        self.clip_half_space(input, &HalfSpace::under(axis, max), out)
    }

    /// Clips against `plane` without the axis-aligned specialization.
    ///
    /// Crossing vertices are not snapped onto the plane.
    pub fn clip_general(&self, input: &[Vec3], plane: &Plane, out: &mut VertexLoop) -> bool {
        self.clip_half_space(input, &HalfSpace::General(*plane), out)
    }
}
