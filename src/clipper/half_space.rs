//! Half-space descriptors and vertex classification.

use crate::error::ClipError;
use crate::math::{Axis, Plane, Vec3};
use crate::tolerance::Tolerance;

/// Which way an axis-aligned half-space faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Positive side is `coord >= value` (plane normal along `+axis`).
    Positive,
    /// Positive side is `coord <= value` (plane normal along `-axis`).
    Negative,
}

/// A half-space, either axis-aligned or general.
///
/// The positive side is the one kept by a clip. Axis-aligned half-spaces take
/// the fast path: the distance is a single subtraction and crossing vertices
/// are snapped exactly onto the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HalfSpace {
    Axis {
        axis: Axis,
        value: f32,
        facing: Facing,
    },
    General(Plane),
}

impl HalfSpace {
    /// `coord >= min` along `axis`.
    pub const fn over(axis: Axis, min: f32) -> Self {
        HalfSpace::Axis {
            axis,
            value: min,
            facing: Facing::Positive,
        }
    }

    /// `coord <= max` along `axis`.
    pub const fn under(axis: Axis, max: f32) -> Self {
        HalfSpace::Axis {
            axis,
            value: max,
            facing: Facing::Negative,
        }
    }

    /// Classifies a plane, picking the axis-aligned form when exactly one
    /// normal component is non-zero.
    ///
    /// Fails if the normal is zero.
    pub fn from_plane(plane: &Plane) -> Result<Self, ClipError> {
        let Plane { a, b, c, d } = *plane;

        let axis = match (a != 0.0, b != 0.0, c != 0.0) {
            (false, false, false) => return Err(ClipError::DegeneratePlane { a, b, c }),
            (true, false, false) => Some((Axis::X, a)),
            (false, true, false) => Some((Axis::Y, b)),
            (false, false, true) => Some((Axis::Z, c)),
            _ => None,
        };

        Ok(match axis {
            Some((axis, n)) => HalfSpace::Axis {
                axis,
                value: -d / n,
                facing: if n > 0.0 {
                    Facing::Positive
                } else {
                    Facing::Negative
                },
            },
            None => HalfSpace::General(*plane),
        })
    }

    /// Equivalent plane coefficients.
    pub fn to_plane(&self) -> Plane {
        match *self {
            HalfSpace::Axis {
                axis,
                value,
                facing,
            } => {
                let s = match facing {
                    Facing::Positive => 1.0,
                    Facing::Negative => -1.0,
                };
                let n = Vec3::ZERO.with(axis, s);
                Plane::new(n.x, n.y, n.z, -s * value)
            }
            HalfSpace::General(plane) => plane,
        }
    }

    /// Same boundary with the sides swapped.
    pub fn flipped(&self) -> Self {
        match *self {
            HalfSpace::Axis {
                axis,
                value,
                facing,
            } => HalfSpace::Axis {
                axis,
                value,
                facing: match facing {
                    Facing::Positive => Facing::Negative,
                    Facing::Negative => Facing::Positive,
                },
            },
            HalfSpace::General(plane) => HalfSpace::General(plane.flipped()),
        }
    }

    /// Signed distance of `p`, positive inside.
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        match *self {
            HalfSpace::Axis {
                axis,
                value,
                facing: Facing::Positive,
            } => p.get(axis) - value,
            HalfSpace::Axis {
                axis,
                value,
                facing: Facing::Negative,
            } => value - p.get(axis),
            HalfSpace::General(plane) => plane.signed_distance(p),
        }
    }

    /// Computes the distance of `p` and which side of the boundary it is on.
    #[inline]
    pub(crate) fn measure(&self, p: Vec3, tol: &Tolerance) -> Sample {
        let dist = self.signed_distance(p);
        let on_plane = match *self {
            HalfSpace::Axis { axis, value, .. } => tol.approx_eq(p.get(axis), value),
            HalfSpace::General(plane) => tol.approx_zero(dist, plane.magnitude_at(p)),
        };

        let class = if on_plane {
            Class::On
        } else if dist < 0.0 {
            Class::Below
        } else {
            Class::Above
        };
        Sample { dist, class }
    }

    /// Point where the segment `a -> b` meets the boundary.
    ///
    /// `t = da / (da - db)` is well defined because callers only ask for
    /// crossings between a strictly negative and a strictly positive sample.
    /// On axis-aligned boundaries the cut coordinate is forced to the plane
    /// value so chained clips don't see residual rounding at the seam.
    #[inline]
    pub(crate) fn crossing(&self, a: Vec3, da: f32, b: Vec3, db: f32) -> Vec3 {
        let mid = a.lerp(b, da / (da - db));
        match *self {
            HalfSpace::Axis { axis, value, .. } => mid.with(axis, value),
            HalfSpace::General(_) => mid,
        }
    }
}

impl From<HalfSpace> for Plane {
    fn from(hs: HalfSpace) -> Self {
        hs.to_plane()
    }
}

/// Position of a vertex relative to a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Class {
    Below,
    On,
    Above,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Sample {
    pub dist: f32,
    pub class: Class,
}
