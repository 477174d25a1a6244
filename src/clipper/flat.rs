//! Box clipping on flat `[f64; 3]` vertex arrays.
//!
//! Boxes are `[x0, y0, z0, x1, y1, z1]`. Instead of bouncing between two
//! buffers, each face is clipped within the one `Vec`: the loop is copied
//! past its own end and the clipped loop is written over the front while the
//! copy is read. Each face costs one pass over the loop. Face semantics match
//! [`Clipper::clip_box`].

use super::half_space::Class;
use super::Clipper;
use crate::math::Axis;
use crate::tolerance::Tolerance;

/// Smallest `[x0, y0, z0, x1, y1, z1]` box holding every point.
pub fn bound_points(points: &[[f64; 3]]) -> Option<[f64; 6]> {
    let (first, rest) = points.split_first()?;
    let mut out = [first[0], first[1], first[2], first[0], first[1], first[2]];
    for p in rest {
        for axis in 0..3 {
            out[axis] = out[axis].min(p[axis]);
            out[axis + 3] = out[axis + 3].max(p[axis]);
        }
    }
    Some(out)
}

/// Inclusive point containment.
pub fn contains(aabb: &[f64; 6], p: &[f64; 3]) -> bool {
    (0..3).all(|axis| p[axis] >= aabb[axis] && p[axis] <= aabb[axis + 3])
}

impl Clipper {
    /// Clips a coplanar loop to `aabb` in place.
    ///
    /// Returns true iff at least three vertices survive every face. When a
    /// face leaves fewer, clipping stops there and `verts` keeps those
    /// survivors.
    pub fn clip_flat_to_aabb(&self, verts: &mut Vec<[f64; 3]>, aabb: &[f64; 6]) -> bool {
        for axis in Axis::ALL {
            let i = axis.index();
            let faces = [(aabb[i], 1.0), (aabb[i + 3], -1.0)];
            for (value, sign) in faces {
                if !clip_face_in_place(verts, i, value, sign, &self.flat_tolerance) {
                    log::trace!(
                        "flat box clip stopped at {axis:?} = {value} with {} vertices",
                        verts.len()
                    );
                    return false;
                }
            }
        }

        true
    }
}

/// Keeps the part of the loop where `sign * (p[axis] - value) >= 0`.
fn clip_face_in_place(
    verts: &mut Vec<[f64; 3]>,
    axis: usize,
    value: f64,
    sign: f64,
    tol: &Tolerance,
) -> bool {
    let Some(&last) = verts.last() else {
        return false;
    };

    let measure = |p: &[f64; 3]| {
        let dist = sign * (p[axis] - value);
        let class = if tol.approx_eq_f64(p[axis], value) {
            Class::On
        } else if dist < 0.0 {
            Class::Below
        } else {
            Class::Above
        };
        (dist, class)
    };

    let crossing = |a: &[f64; 3], da: f64, b: &[f64; 3], db: f64| {
        let t = da / (da - db);
        let mut mid = [0.0; 3];
        for k in 0..3 {
            mid[k] = a[k] + t * (b[k] - a[k]);
        }
        mid[axis] = value;
        mid
    };

    let count = verts.len();
    // Each input vertex writes at most two outputs, so the write cursor stays
    // behind the unread part of the copy.
    verts.extend_from_within(..);

    let mut va = last;
    let (mut da, mut ca) = measure(&va);
    let mut w = 0;

    for r in count..2 * count {
        let vb = verts[r];
        let (db, cb) = measure(&vb);

        match (ca, cb) {
            (Class::Below, Class::Above) => {
                verts[w] = crossing(&va, da, &vb, db);
                verts[w + 1] = vb;
                w += 2;
            }
            (Class::Above, Class::Below) => {
                verts[w] = crossing(&va, da, &vb, db);
                w += 1;
            }
            (Class::Below | Class::On, Class::Below) => {}
            _ => {
                verts[w] = vb;
                w += 1;
            }
        }

        va = vb;
        da = db;
        ca = cb;
    }

    verts.truncate(w);
    verts.len() >= 3
}
