//! Splitting a coplanar loop into the pieces on either side of a plane.
//!
//! Same single pass as clipping, but both sides are written at once. Every
//! crossing vertex goes to both outputs so the two pieces share the cut edge.

use std::ops::Neg;

use crate::math::{Axis, Plane, Vec3};
use crate::vertex_loop::VertexLoop;

use super::half_space::{Class, HalfSpace};
use super::Clipper;

/// Which side receives vertices lying on the splitting plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// On-plane vertices belong to the positive piece.
    #[default]
    Inclusive,
    /// On-plane vertices belong to the negative piece; the positive side is
    /// an open half-space. Use this when a seam plane is shared by two cells
    /// and must only be counted once.
    Exclusive,
}

/// Where a loop ended up after a split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Side {
    /// Entirely on the negative side; the positive output is empty.
    Negative = -1,
    /// Both outputs are non-empty.
    Spanning = 0,
    /// Entirely on the positive side; the negative output is empty.
    Positive = 1,
}

impl Side {
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    fn from_outputs(neg: &VertexLoop, pos: &VertexLoop) -> Self {
        match (neg.is_empty(), pos.is_empty()) {
            (true, false) => Side::Positive,
            (false, true) => Side::Negative,
            _ => Side::Spanning,
        }
    }
}

impl Neg for Side {
    type Output = Side;

    fn neg(self) -> Self::Output {
        match self {
            Side::Negative => Side::Positive,
            Side::Spanning => Side::Spanning,
            Side::Positive => Side::Negative,
        }
    }
}

/// Class of a vertex relative to the side that owns on-plane vertices.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Region {
    Home,
    On,
    Away,
}

impl Region {
    fn of(class: Class, boundary: Boundary) -> Self {
        match (class, boundary) {
            (Class::On, _) => Region::On,
            (Class::Below, Boundary::Inclusive) | (Class::Above, Boundary::Exclusive) => {
                Region::Away
            }
            _ => Region::Home,
        }
    }
}

impl Clipper {
    /// Splits `input` by `plane` into its negative and non-negative pieces.
    ///
    /// Axis-aligned planes take the fast path. On-plane vertices go to `pos`
    /// for every kind of plane. A plane with a zero normal clears both
    /// outputs and reports [`Side::Spanning`].
    pub fn split(
        &self,
        input: &[Vec3],
        plane: &Plane,
        neg: &mut VertexLoop,
        pos: &mut VertexLoop,
    ) -> Side {
        match HalfSpace::from_plane(plane) {
            Ok(hs) => self.split_half_space(input, &hs, Boundary::Inclusive, neg, pos),
            Err(err) => {
                log::debug!("split skipped: {err}");
                neg.clear();
                pos.clear();
                Side::Spanning
            }
        }
    }

    /// Splits along an axis-aligned plane; on-plane vertices go to `pos`.
    pub fn split_axis(
        &self,
        input: &[Vec3],
        axis: Axis,
        value: f32,
        neg: &mut VertexLoop,
        pos: &mut VertexLoop,
    ) -> Side {
        self.split_half_space(input, &HalfSpace::over(axis, value), Boundary::Inclusive, neg, pos)
    }

    /// Splits along an axis-aligned plane; on-plane vertices go to `neg`.
    pub fn split_axis_exclusive(
        &self,
        input: &[Vec3],
        axis: Axis,
        value: f32,
        neg: &mut VertexLoop,
        pos: &mut VertexLoop,
    ) -> Side {
        self.split_half_space(input, &HalfSpace::over(axis, value), Boundary::Exclusive, neg, pos)
    }

    /// Splits by `plane` without the axis-aligned specialization.
    pub fn split_general(
        &self,
        input: &[Vec3],
        plane: &Plane,
        boundary: Boundary,
        neg: &mut VertexLoop,
        pos: &mut VertexLoop,
    ) -> Side {
        self.split_half_space(input, &HalfSpace::General(*plane), boundary, neg, pos)
    }

    /// Splits `input` by the boundary of `hs` in one pass.
    ///
    /// A side that ends up with only one or two vertices (the loop merely
    /// touches the plane at a point or along an edge) is cleared when the
    /// other side is a full polygon. An empty input yields two empty outputs
    /// and [`Side::Spanning`].
    pub fn split_half_space(
        &self,
        input: &[Vec3],
        hs: &HalfSpace,
        boundary: Boundary,
        neg: &mut VertexLoop,
        pos: &mut VertexLoop,
    ) -> Side {
        neg.clear();
        pos.clear();
        let Some(&last) = input.last() else {
            return Side::Spanning;
        };

        let cap = input.len() * 3 / 2;
        neg.ensure_capacity(cap);
        pos.ensure_capacity(cap);

        let (home, away) = match boundary {
            Boundary::Inclusive => (&mut *pos, &mut *neg),
            Boundary::Exclusive => (&mut *neg, &mut *pos),
        };

        let mut va = last;
        let mut a = hs.measure(va, &self.tolerance);
        let mut ra = Region::of(a.class, boundary);

        for &vb in input {
            let b = hs.measure(vb, &self.tolerance);
            let rb = Region::of(b.class, boundary);

            match (ra, rb) {
                (Region::Home | Region::On, Region::Home | Region::On) => home.push(vb),
                (Region::Away, Region::Away) => away.push(vb),
                (Region::Home, Region::Away) => {
                    let mid = hs.crossing(va, a.dist, vb, b.dist);
                    home.push(mid);
                    away.push(mid);
                    away.push(vb);
                }
                (Region::Away, Region::Home) => {
                    let mid = hs.crossing(va, a.dist, vb, b.dist);
                    away.push(mid);
                    home.push(mid);
                    home.push(vb);
                }
                (Region::Away, Region::On) => {
                    away.push(vb);
                    home.push(vb);
                }
                (Region::On, Region::Away) => {
                    // `va` normally only goes home; make sure the away piece
                    // starts from it too.
                    if away.last() != Some(&va) {
                        away.push(va);
                    }
                    away.push(vb);
                }
            }

            va = vb;
            a = b;
            ra = rb;
        }

        drop_closing_duplicate(neg);
        drop_closing_duplicate(pos);

        if pos.is_polygon() && !neg.is_polygon() {
            neg.clear();
        } else if neg.is_polygon() && !pos.is_polygon() {
            pos.clear();
        }

        Side::from_outputs(neg, pos)
    }
}

/// Removes a last vertex that repeats the first, left when the pass enters
/// a side at an on-plane vertex and wraps around back to it.
fn drop_closing_duplicate(out: &mut VertexLoop) {
    let n = out.len();
    if n >= 2 && out.first() == out.last() {
        out.truncate(n - 1);
    }
}
