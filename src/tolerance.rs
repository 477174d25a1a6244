//! Tolerance comparisons that guard against rounding error.
//!
//! Two numbers compare equal when either their absolute difference is below
//! an absolute threshold or their difference relative to the larger magnitude
//! is below a relative threshold. Clipping uses these to decide whether a
//! vertex lies on a cutting plane.

use std::cmp::Ordering;

use approx::relative_eq;

/// 32-bit unit roundoff, `2^-24`.
pub const FEPS: f32 = 5.960_464_5e-8;
/// Default 32-bit relative error, `FEPS * 32`.
pub const FREL_ERR: f32 = FEPS * 32.0;
/// Default 32-bit absolute error, smallest subnormal times 32.
pub const FABS_ERR: f32 = 4.484_155e-44;

/// 64-bit unit roundoff, `2^-53`.
pub const EPS: f64 = 1.110_223_024_625_156_5e-16;
/// Default 64-bit relative error, `EPS * 32`.
pub const REL_ERR: f64 = EPS * 32.0;
/// Default 64-bit absolute error, smallest subnormal times 32.
pub const ABS_ERR: f64 = 1.581_010_066_691_994_2e-322;

/// A pair of relative and absolute error bounds.
///
/// Values are stored as `f64`; the `f32` comparisons narrow them on use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub rel: f64,
    pub abs: f64,
}

impl Tolerance {
    /// Defaults for single precision data.
    pub const F32: Self = Self {
        rel: FREL_ERR as f64,
        abs: FABS_ERR as f64,
    };

    /// Defaults for double precision data.
    pub const F64: Self = Self {
        rel: REL_ERR,
        abs: ABS_ERR,
    };

    /// Exact comparisons only.
    pub const EXACT: Self = Self { rel: 0.0, abs: 0.0 };

    pub const fn new(rel: f64, abs: f64) -> Self {
        Self { rel, abs }
    }

    /// Returns true if `a` and `b` are equal within either bound.
    #[inline]
    pub fn approx_eq(&self, a: f32, b: f32) -> bool {
        relative_eq!(a, b, epsilon = self.abs as f32, max_relative = self.rel as f32)
    }

    /// Returns true if `v` is effectively zero compared to `reference`.
    ///
    /// `|v|` must not exceed the absolute bound, or the relative bound scaled
    /// by `|reference|`. Exact zero always qualifies, even with zero bounds.
    #[inline]
    pub fn approx_zero(&self, v: f32, reference: f32) -> bool {
        let v = v.abs();
        v <= self.abs as f32 || v <= self.rel as f32 * reference.abs()
    }

    /// Orders `a` and `b`, reporting `Equal` when they are approximately equal.
    pub fn approx_cmp(&self, a: f32, b: f32) -> Ordering {
        if self.approx_eq(a, b) {
            Ordering::Equal
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    #[inline]
    pub fn approx_eq_f64(&self, a: f64, b: f64) -> bool {
        relative_eq!(a, b, epsilon = self.abs, max_relative = self.rel)
    }

    #[inline]
    pub fn approx_zero_f64(&self, v: f64, reference: f64) -> bool {
        let v = v.abs();
        v <= self.abs || v <= self.rel * reference.abs()
    }

    pub fn approx_cmp_f64(&self, a: f64, b: f64) -> Ordering {
        if self.approx_eq_f64(a, b) {
            Ordering::Equal
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::F32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_powers_of_two() {
        assert_eq!(FEPS, 2f32.powi(-24));
        assert_eq!(FREL_ERR, 2f32.powi(-19));
        assert_eq!(EPS, 2f64.powi(-53));
        assert_eq!(REL_ERR, 2f64.powi(-48));
        assert!(FABS_ERR > 0.0 && FABS_ERR < f32::MIN_POSITIVE);
        assert!(ABS_ERR > 0.0 && ABS_ERR < f64::MIN_POSITIVE);
    }

    #[test]
    fn test_approx_eq_relative() {
        let tol = Tolerance::F32;
        assert!(tol.approx_eq(1.0, 1.0 + f32::EPSILON));
        assert!(tol.approx_eq(1000.0, 1000.0001));
        assert!(!tol.approx_eq(1.0, 1.001));
        assert!(!tol.approx_eq(0.0, 1e-30));
    }

    #[test]
    fn test_approx_zero_uses_reference() {
        let tol = Tolerance::F32;
        assert!(tol.approx_zero(1e-6, 10.0));
        assert!(!tol.approx_zero(1e-6, 0.01));
        assert!(tol.approx_zero(0.0, 0.0));
        assert!(tol.approx_zero(-1e-6, -10.0));
    }

    #[test]
    fn test_approx_cmp() {
        let tol = Tolerance::default();
        assert_eq!(tol.approx_cmp(1.0, 1.0 + f32::EPSILON), Ordering::Equal);
        assert_eq!(tol.approx_cmp(1.0, 2.0), Ordering::Less);
        assert_eq!(tol.approx_cmp(2.0, 1.0), Ordering::Greater);
    }

    #[test]
    fn test_f64_comparisons() {
        let tol = Tolerance::F64;
        assert!(tol.approx_eq_f64(0.1 + 0.2, 0.3));
        assert!(!tol.approx_eq_f64(0.3, 0.3001));
        assert!(tol.approx_zero_f64(1e-15, 100.0));
        assert_eq!(tol.approx_cmp_f64(1.0, 0.5), Ordering::Greater);
    }

    #[test]
    fn test_exact_tolerance() {
        let tol = Tolerance::EXACT;
        assert!(tol.approx_eq(0.5, 0.5));
        assert!(!tol.approx_eq(1.0, 1.0 + f32::EPSILON));
        assert!(!tol.approx_zero(f32::MIN_POSITIVE, 1.0));
        assert!(tol.approx_zero(0.0, 1.0));
        assert!(tol.approx_zero(-0.0, 0.0));
        assert!(tol.approx_zero_f64(0.0, 3.0));
        assert!(!tol.approx_zero_f64(f64::MIN_POSITIVE, 3.0));
    }
}
