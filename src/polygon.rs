//! Measures of planar polygons given as implicitly closed vertex loops.
//!
//! The first vertex is not repeated at the end; if it is, the results are
//! unaffected.

use crate::math::Vec3;

/// Newell's normal of a loop.
///
/// Its length is twice the enclosed area and it points along the side from
/// which the loop winds counter-clockwise. Robust to collinear vertices.
pub fn newell_normal(verts: &[Vec3]) -> Vec3 {
    let Some(&last) = verts.last() else {
        return Vec3::ZERO;
    };

    let mut n = Vec3::ZERO;
    let mut a = last;
    for &b in verts {
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
        a = b;
    }
    n
}

/// Unsigned area of a planar loop. Zero for fewer than three vertices.
pub fn area(verts: &[Vec3]) -> f32 {
    0.5 * newell_normal(verts).magnitude()
}

pub fn tri_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    0.5 * (b - a).cross(c - a).magnitude()
}

/// Area-weighted centroid of a planar loop.
///
/// Returns `None` when the loop encloses no area.
pub fn centroid(verts: &[Vec3]) -> Option<Vec3> {
    let (&origin, rest) = verts.split_first()?;
    let normal = newell_normal(verts);

    let mut sum = Vec3::ZERO;
    let mut weight = 0.0;
    for pair in rest.windows(2) {
        let (b, c) = (pair[0], pair[1]);
        // Signed so concave fans cancel correctly.
        let w = (b - origin).cross(c - origin).dot(normal);
        sum = sum + (origin + b + c) * w;
        weight += w;
    }

    if weight == 0.0 {
        return None;
    }
    Some(sum / (3.0 * weight))
}
