//! Implicit planes of the form `a * x + b * y + c * z + d == 0`.

use std::ops::Neg;

use super::vec3::Vec3;

/// A plane given by four coefficients.
///
/// The sign of [`Plane::signed_distance`] tells which half-space a point is
/// in. The value is only a true distance when the normal `(a, b, c)` has unit
/// length; clipping never relies on that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Plane {
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    /// Plane through `point` with the given normal. The normal points into
    /// the positive half-space.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        Self::new(normal.x, normal.y, normal.z, -normal.dot(point))
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// Evaluates `a * x + b * y + c * z + d`.
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal().dot(p) + self.d
    }

    /// Sum of the magnitudes of the terms of [`Plane::signed_distance`].
    ///
    /// This bounds the rounding error of the evaluation and is used as the
    /// reference magnitude when deciding whether a point is on the plane.
    #[inline]
    pub fn magnitude_at(&self, p: Vec3) -> f32 {
        (self.a * p.x).abs() + (self.b * p.y).abs() + (self.c * p.z).abs() + self.d.abs()
    }

    /// Same plane with the half-spaces swapped.
    pub fn flipped(&self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}

impl Neg for Plane {
    type Output = Plane;

    fn neg(self) -> Self::Output {
        self.flipped()
    }
}

impl From<[f32; 4]> for Plane {
    fn from([a, b, c, d]: [f32; 4]) -> Self {
        Self::new(a, b, c, d)
    }
}
