//! 3D vector arithmetic and the geometric queries built on it.
//!
//! `Vec3` is a plain `Copy` value: every operation returns a new vector,
//! never mutating its inputs. Operations that can hit a degenerate input
//! (zero divisor, zero magnitude) return `Result` — see [`GeomError`].

use crate::error::GeomError;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 3D vector with `f64` components.
///
/// 2D callers construct one with [`Vec3::from_xy`], which zero-pads z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A vector in the xy-plane (z = 0).
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Squared Euclidean norm. Cheaper than [`Vec3::magnitude`] when only
    /// comparisons are needed.
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean norm `sqrt(x² + y² + z²)`.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Every component multiplied by `k`. Equivalent to `self * k`.
    pub fn scaled(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    /// Every component divided by `k`.
    ///
    /// Fails with [`GeomError::DivisionByZero`] when `k == 0.0`.
    pub fn divided(self, k: f64) -> Result<Self, GeomError> {
        if k == 0.0 {
            return Err(GeomError::DivisionByZero);
        }
        Ok(Self::new(self.x / k, self.y / k, self.z / k))
    }

    /// The unit vector pointing the same way as `self`.
    ///
    /// Fails with [`GeomError::ZeroMagnitude`] for the zero vector.
    pub fn normalized(self) -> Result<Self, GeomError> {
        let m = self.magnitude();
        if m == 0.0 {
            return Err(GeomError::ZeroMagnitude);
        }
        Ok(self.scaled(1.0 / m))
    }

    /// Scalar dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`, as a new vector. Neither input is
    /// modified.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        self.scaled(k)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// ─── Derived queries ─────────────────────────────────────────────────────

/// An angle reported in both units, since UI surfaces want degrees while
/// canvas arcs want radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    pub radians: f64,
    pub degrees: f64,
}

impl Angle {
    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians,
            degrees: radians.to_degrees(),
        }
    }
}

/// Area of the triangle spanned by `a` and `b` from a common origin:
/// half the parallelogram area `|a × b|`.
///
/// Total over all inputs — collinear vectors (including the zero vector)
/// span a degenerate triangle of area 0.
pub fn triangle_area(a: Vec3, b: Vec3) -> f64 {
    a.cross(b).magnitude() / 2.0
}

/// The angle between `a` and `b`.
///
/// The cosine is clamped to [-1, 1] before `acos`, since rounding in the
/// dot/magnitude ratio can push it fractionally outside the domain for
/// near-parallel vectors.
///
/// Fails with [`GeomError::ZeroMagnitude`] if either input is the zero
/// vector.
pub fn angle_between(a: Vec3, b: Vec3) -> Result<Angle, GeomError> {
    let ma = a.magnitude();
    let mb = b.magnitude();
    if ma == 0.0 || mb == 0.0 {
        return Err(GeomError::ZeroMagnitude);
    }
    let cos = (a.dot(b) / (ma * mb)).clamp(-1.0, 1.0);
    Ok(Angle::from_radians(cos.acos()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[test]
    fn add_then_sub_restores_original() {
        let v1 = Vec3::new(2.5, -1.0, 3.0);
        let v2 = Vec3::new(0.75, 4.0, -2.25);
        let v3 = v1 + v2 - v2;
        assert_abs_diff_eq!(v3.x, v1.x, epsilon = 1e-9);
        assert_abs_diff_eq!(v3.y, v1.y, epsilon = 1e-9);
        assert_abs_diff_eq!(v3.z, v1.z, epsilon = 1e-9);
    }

    #[test]
    fn scale_then_divide_roundtrips() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        let back = v.scaled(2.0).divided(2.0).unwrap();
        assert_abs_diff_eq!(back.x, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(back.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn magnitude_of_3_4_0_is_5() {
        assert_relative_eq!(Vec3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    }

    #[test]
    fn normalized_has_unit_magnitude() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.0, -3.0),
            Vec3::new(0.001, 0.0, 0.0),
            Vec3::new(1e6, -2e6, 0.5),
        ] {
            let unit = v.normalized().unwrap();
            assert_abs_diff_eq!(unit.magnitude(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn dot_is_commutative() {
        let a = Vec3::new(1.5, -2.0, 0.25);
        let b = Vec3::new(-3.0, 0.5, 4.0);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn cross_is_anti_commutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 1.0);
        assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn cross_of_unit_axes() {
        assert_eq!(X.cross(Y), Z);
    }

    #[test]
    fn divided_by_zero_fails() {
        assert_eq!(X.divided(0.0), Err(GeomError::DivisionByZero));
    }

    #[test]
    fn normalized_zero_vector_fails() {
        assert_eq!(Vec3::ZERO.normalized(), Err(GeomError::ZeroMagnitude));
    }

    #[test]
    fn angle_of_vector_with_itself_is_zero() {
        let v = Vec3::new(2.0, 5.0, -1.0);
        let angle = angle_between(v, v).unwrap();
        assert_abs_diff_eq!(angle.degrees, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn angle_of_orthogonal_axes_is_90_degrees() {
        let angle = angle_between(X, Y).unwrap();
        assert_abs_diff_eq!(angle.radians, std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
        assert_abs_diff_eq!(angle.degrees, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_clamps_near_parallel_cosine() {
        // A vector and a scaled copy of itself: rounding in the ratio can
        // push the cosine above 1 and acos would return NaN unclamped.
        let v = Vec3::new(0.1, 0.2, 0.3);
        let angle = angle_between(v, v.scaled(7.3)).unwrap();
        assert!(angle.radians.is_finite());
        assert_abs_diff_eq!(angle.radians, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn angle_with_zero_vector_fails() {
        assert_eq!(angle_between(X, Vec3::ZERO), Err(GeomError::ZeroMagnitude));
        assert_eq!(angle_between(Vec3::ZERO, X), Err(GeomError::ZeroMagnitude));
    }

    #[test]
    fn unit_triangle_area_is_half() {
        assert_relative_eq!(triangle_area(X, Y), 0.5);
    }

    #[test]
    fn triangle_area_is_orientation_independent() {
        let a = Vec3::new(2.0, 1.0, 0.0);
        let b = Vec3::new(-1.0, 3.0, 0.5);
        assert_eq!(triangle_area(a, b), triangle_area(b, a));
    }

    #[test]
    fn collinear_vectors_span_zero_area() {
        let v = Vec3::new(2.0, -3.0, 1.0);
        assert_abs_diff_eq!(triangle_area(v, v.scaled(4.0)), 0.0, epsilon = 1e-9);
        assert_eq!(triangle_area(v, Vec3::ZERO), 0.0);
    }
}
